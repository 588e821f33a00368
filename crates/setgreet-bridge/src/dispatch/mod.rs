//! Method-channel dispatch.
//!
//! A host delivers a [`MethodCall`]; the [`Dispatcher`] resolves the method,
//! validates its arguments, forwards the typed call to the SDK, and yields an
//! [`Outcome`] that encodes into an [`Envelope`]:
//!
//! ```json
//! {"method":"trackEvent","arguments":{"eventName":"purchase"}}
//! ```
//!
//! ```json
//! {"kind":"success","value":null}
//! {"kind":"error","code":"INVALID_ARGUMENT","message":"Event name cannot be empty","details":null}
//! {"kind":"not_implemented"}
//! ```

mod request;
mod response;
mod router;

pub use self::request::{CHANNEL_NAME, MethodCall};
pub use self::response::{Envelope, Outcome};
pub use self::router::{Dispatcher, Method};
