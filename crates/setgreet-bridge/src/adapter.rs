//! Seam between validated arguments and the native SDK.
//!
//! Each method forwards its typed arguments to the collaborator and converts
//! an [`SdkFault`] into a [`BridgeError`] tagged with the method's category.
//! The fault's description wins when present; otherwise the method's fixed
//! fallback text is used.

use serde_json::Value;

use crate::arguments::{
    IdentifyUserArgs, InitializeArgs, ShowFlowArgs, TrackEventArgs, TrackScreenArgs,
};
use crate::dispatch::Method;
use crate::errors::BridgeError;
use crate::sdk::{SdkFault, SetgreetSdk};

/// Forwards validated calls to a [`SetgreetSdk`].
#[derive(Debug)]
pub struct SdkAdapter<'a, S: ?Sized> {
    sdk: &'a S,
}

impl<'a, S> SdkAdapter<'a, S>
where
    S: SetgreetSdk + ?Sized,
{
    /// Wraps a borrowed collaborator.
    pub const fn new(sdk: &'a S) -> Self {
        Self { sdk }
    }

    /// Calls `initialize`.
    ///
    /// # Errors
    ///
    /// Returns `Initialization` when the SDK faults.
    pub fn initialize(&self, args: InitializeArgs) -> Result<Value, BridgeError> {
        let config = args.config();
        complete(
            Method::Initialize,
            self.sdk.initialize(args.app_key, config),
        )
    }

    /// Calls `identify_user`.
    ///
    /// # Errors
    ///
    /// Returns `User` when the SDK faults.
    pub fn identify_user(&self, args: IdentifyUserArgs) -> Result<Value, BridgeError> {
        complete(
            Method::IdentifyUser,
            self.sdk
                .identify_user(args.user_id, args.attributes, args.operation, args.locale),
        )
    }

    /// Calls `reset_user`.
    ///
    /// # Errors
    ///
    /// Returns `User` when the SDK faults.
    pub fn reset_user(&self) -> Result<Value, BridgeError> {
        complete(Method::ResetUser, self.sdk.reset_user())
    }

    /// Calls `track_event`.
    ///
    /// # Errors
    ///
    /// Returns `Tracking` when the SDK faults.
    pub fn track_event(&self, args: TrackEventArgs) -> Result<Value, BridgeError> {
        complete(
            Method::TrackEvent,
            self.sdk.track_event(args.event_name, args.properties),
        )
    }

    /// Calls `track_screen`.
    ///
    /// # Errors
    ///
    /// Returns `Tracking` when the SDK faults.
    pub fn track_screen(&self, args: TrackScreenArgs) -> Result<Value, BridgeError> {
        complete(
            Method::TrackScreen,
            self.sdk.track_screen(args.screen_name, args.properties),
        )
    }

    /// Calls `show_flow`.
    ///
    /// # Errors
    ///
    /// Returns `Flow` when the SDK faults.
    pub fn show_flow(&self, args: ShowFlowArgs) -> Result<Value, BridgeError> {
        complete(Method::ShowFlow, self.sdk.show_flow(args.flow_id))
    }
}

/// Maps an SDK return onto the channel result for `method`.
///
/// None of the SDK calls yield a value, so success is always `null`.
fn complete(method: Method, result: Result<(), SdkFault>) -> Result<Value, BridgeError> {
    result
        .map(|()| Value::Null)
        .map_err(|fault| method.failure(fault.description()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::ErrorCode;
    use crate::operation::Operation;
    use crate::tests::support::MockSdk;

    #[test]
    fn successful_calls_yield_null() {
        let mut sdk = MockSdk::new();
        sdk.expect_reset_user().once().returning(|| Ok(()));
        let adapter = SdkAdapter::new(&sdk);
        assert_eq!(adapter.reset_user(), Ok(Value::Null));
    }

    #[test]
    fn forwards_identify_arguments_verbatim() {
        let mut sdk = MockSdk::new();
        sdk.expect_identify_user()
            .once()
            .withf(|user_id, attributes, operation, locale| {
                user_id == "u1"
                    && attributes.as_ref().and_then(|a| a.get("tier")) == Some(&json!("gold"))
                    && *operation == Operation::Update
                    && locale.as_deref() == Some("fr")
            })
            .returning(|_, _, _, _| Ok(()));

        let mut attributes = crate::payload::Properties::new();
        attributes.insert("tier".to_owned(), json!("gold"));
        let args = IdentifyUserArgs {
            user_id: "u1".to_owned(),
            attributes: Some(attributes),
            operation: Operation::Update,
            locale: Some("fr".to_owned()),
        };
        assert_eq!(SdkAdapter::new(&sdk).identify_user(args), Ok(Value::Null));
    }

    #[test]
    fn fault_description_is_preserved() {
        let mut sdk = MockSdk::new();
        sdk.expect_track_event()
            .once()
            .returning(|_, _| Err(SdkFault::new("queue full")));
        let args = TrackEventArgs {
            event_name: "purchase".to_owned(),
            properties: None,
        };
        let error = SdkAdapter::new(&sdk)
            .track_event(args)
            .expect_err("fault should surface");
        assert_eq!(error.code(), ErrorCode::TrackingError);
        assert_eq!(error.message(), "queue full");
    }

    #[test]
    fn opaque_fault_uses_fallback_message() {
        let mut sdk = MockSdk::new();
        sdk.expect_show_flow()
            .once()
            .returning(|_| Err(SdkFault::opaque()));
        let args = ShowFlowArgs {
            flow_id: "onboarding".to_owned(),
        };
        let error = SdkAdapter::new(&sdk)
            .show_flow(args)
            .expect_err("fault should surface");
        assert_eq!(error, BridgeError::new(ErrorCode::FlowError, "Failed to show flow"));
    }
}
