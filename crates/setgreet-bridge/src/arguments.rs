//! Typed arguments for each channel method.
//!
//! Each struct pulls its fields out of a [`Payload`] and applies the
//! required-field rules before anything is forwarded to the SDK. Required
//! strings must be present and non-blank after trimming; optional fields
//! default to `None`/`false` and are otherwise passed through opaquely.
//! Extraction stops at the first failing field.

use crate::errors::BridgeError;
use crate::operation::Operation;
use crate::payload::{Payload, Properties};
use crate::sdk::SdkConfig;

/// Required string fields, keyed by their payload name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// `appKey` on `initialize`.
    AppKey,
    /// `userId` on `identifyUser`.
    UserId,
    /// `eventName` on `trackEvent`.
    EventName,
    /// `screenName` on `trackScreen`.
    ScreenName,
    /// `flowId` on `showFlow`.
    FlowId,
}

impl RequiredField {
    /// Payload key holding the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AppKey => "appKey",
            Self::UserId => "userId",
            Self::EventName => "eventName",
            Self::ScreenName => "screenName",
            Self::FlowId => "flowId",
        }
    }

    /// Human-readable label used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AppKey => "App key",
            Self::UserId => "User ID",
            Self::EventName => "Event name",
            Self::ScreenName => "Screen name",
            Self::FlowId => "Flow ID",
        }
    }

    /// Reads the field, rejecting missing and blank values.
    ///
    /// The value is returned as sent; trimming only decides emptiness.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the field when it is missing (or not a
    /// string) or when it is blank after trimming whitespace.
    pub fn require(self, payload: &Payload<'_>) -> Result<String, BridgeError> {
        let Some(value) = payload.text(self.key()) else {
            return Err(BridgeError::invalid_argument(format!(
                "{} is required",
                self.label()
            )));
        };
        if value.trim().is_empty() {
            return Err(BridgeError::invalid_argument(format!(
                "{} cannot be empty",
                self.label()
            )));
        }
        Ok(value.to_owned())
    }
}

fn optional_properties(payload: &Payload<'_>, key: &str) -> Option<Properties> {
    payload.mapping(key).cloned()
}

/// Arguments for `initialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeArgs {
    /// Application key issued by Setgreet.
    pub app_key: String,
    /// Enables verbose SDK logging; `false` when omitted.
    pub debug_mode: bool,
}

impl InitializeArgs {
    /// Extracts and validates `initialize` arguments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `appKey` is missing or blank.
    pub fn extract(payload: &Payload<'_>) -> Result<Self, BridgeError> {
        let app_key = RequiredField::AppKey.require(payload)?;
        let debug_mode = payload.flag("debugMode").unwrap_or(false);
        Ok(Self {
            app_key,
            debug_mode,
        })
    }

    /// SDK configuration derived from the arguments.
    #[must_use]
    pub const fn config(&self) -> SdkConfig {
        SdkConfig {
            debug_mode: self.debug_mode,
        }
    }
}

/// Arguments for `identifyUser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyUserArgs {
    /// Host-assigned user identifier.
    pub user_id: String,
    /// Optional profile attributes.
    pub attributes: Option<Properties>,
    /// How the attributes apply to an existing profile.
    pub operation: Operation,
    /// Optional locale tag for the user.
    pub locale: Option<String>,
}

impl IdentifyUserArgs {
    /// Extracts and validates `identifyUser` arguments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `userId` is missing or blank.
    pub fn extract(payload: &Payload<'_>) -> Result<Self, BridgeError> {
        let user_id = RequiredField::UserId.require(payload)?;
        Ok(Self {
            user_id,
            attributes: optional_properties(payload, "attributes"),
            operation: Operation::normalize(payload.text("operation")),
            locale: payload.text("locale").map(str::to_owned),
        })
    }
}

/// Arguments for `trackEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEventArgs {
    /// Event name.
    pub event_name: String,
    /// Optional event properties.
    pub properties: Option<Properties>,
}

impl TrackEventArgs {
    /// Extracts and validates `trackEvent` arguments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `eventName` is missing or blank.
    pub fn extract(payload: &Payload<'_>) -> Result<Self, BridgeError> {
        Ok(Self {
            event_name: RequiredField::EventName.require(payload)?,
            properties: optional_properties(payload, "properties"),
        })
    }
}

/// Arguments for `trackScreen`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackScreenArgs {
    /// Screen name.
    pub screen_name: String,
    /// Optional screen properties.
    pub properties: Option<Properties>,
}

impl TrackScreenArgs {
    /// Extracts and validates `trackScreen` arguments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `screenName` is missing or blank.
    pub fn extract(payload: &Payload<'_>) -> Result<Self, BridgeError> {
        Ok(Self {
            screen_name: RequiredField::ScreenName.require(payload)?,
            properties: optional_properties(payload, "properties"),
        })
    }
}

/// Arguments for `showFlow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowFlowArgs {
    /// Identifier of the flow to present.
    pub flow_id: String,
}

impl ShowFlowArgs {
    /// Extracts and validates `showFlow` arguments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `flowId` is missing or blank.
    pub fn extract(payload: &Payload<'_>) -> Result<Self, BridgeError> {
        Ok(Self {
            flow_id: RequiredField::FlowId.require(payload)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::errors::ErrorCode;

    #[track_caller]
    fn assert_invalid(result: Result<String, BridgeError>, expected_message: &str) {
        let error = result.expect_err("validation should fail");
        assert_eq!(error.code(), ErrorCode::InvalidArgument);
        assert_eq!(error.message(), expected_message);
    }

    #[rstest]
    #[case(RequiredField::AppKey, "App key")]
    #[case(RequiredField::UserId, "User ID")]
    #[case(RequiredField::EventName, "Event name")]
    #[case(RequiredField::ScreenName, "Screen name")]
    #[case(RequiredField::FlowId, "Flow ID")]
    fn missing_field_is_required(#[case] field: RequiredField, #[case] label: &str) {
        let arguments = json!({});
        let payload = Payload::from_value(&arguments);
        assert_invalid(field.require(&payload), &format!("{label} is required"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs_and_newlines("\t\n ")]
    #[case::unicode_space("\u{2003}")]
    fn blank_field_cannot_be_empty(#[case] blank: &str) {
        for field in [
            RequiredField::AppKey,
            RequiredField::UserId,
            RequiredField::EventName,
            RequiredField::ScreenName,
            RequiredField::FlowId,
        ] {
            let mut entries = Properties::new();
            entries.insert(field.key().to_owned(), json!(blank));
            let arguments = Value::Object(entries);
            let payload = Payload::from_value(&arguments);
            assert_invalid(
                field.require(&payload),
                &format!("{} cannot be empty", field.label()),
            );
        }
    }

    #[rstest]
    #[case::single_char("x")]
    #[case::padded("  u1  ")]
    #[case::long("a-very-long-identifier-with-many-characters-0123456789")]
    fn non_blank_values_pass_untrimmed(#[case] value: &str) {
        let arguments = json!({ "userId": value });
        let payload = Payload::from_value(&arguments);
        let accepted = RequiredField::UserId.require(&payload).expect("valid");
        assert_eq!(accepted, value);
    }

    #[test]
    fn mistyped_required_field_reads_as_missing() {
        let arguments = json!({ "flowId": 7 });
        let payload = Payload::from_value(&arguments);
        assert_invalid(RequiredField::FlowId.require(&payload), "Flow ID is required");
    }

    #[test]
    fn initialize_defaults_debug_mode_to_false() {
        let arguments = json!({ "appKey": "key-123" });
        let args = InitializeArgs::extract(&Payload::from_value(&arguments)).expect("valid");
        assert_eq!(args.app_key, "key-123");
        assert_eq!(args.config(), SdkConfig { debug_mode: false });
    }

    #[test]
    fn initialize_rejects_empty_app_key_even_with_debug_mode() {
        let arguments = json!({ "appKey": "", "debugMode": true });
        let error = InitializeArgs::extract(&Payload::from_value(&arguments)).expect_err("invalid");
        assert_eq!(error, BridgeError::invalid_argument("App key cannot be empty"));
    }

    #[test]
    fn identify_user_collects_optional_fields() {
        let arguments = json!({
            "userId": "u1",
            "attributes": {"plan": "pro"},
            "operation": "UPDATE",
            "locale": "en-GB"
        });
        let args = IdentifyUserArgs::extract(&Payload::from_value(&arguments)).expect("valid");
        assert_eq!(args.user_id, "u1");
        assert_eq!(args.operation, Operation::Update);
        assert_eq!(args.locale.as_deref(), Some("en-GB"));
        let attributes = args.attributes.expect("attributes");
        assert_eq!(attributes.get("plan"), Some(&json!("pro")));
    }

    #[test]
    fn identify_user_defaults_optional_fields() {
        let arguments = json!({ "userId": "u1", "attributes": "plan=pro" });
        let args = IdentifyUserArgs::extract(&Payload::from_value(&arguments)).expect("valid");
        assert_eq!(args.attributes, None);
        assert_eq!(args.operation, Operation::Create);
        assert_eq!(args.locale, None);
    }

    #[rstest]
    #[case::event(json!({ "eventName": "purchase", "properties": {"total": 9.5} }))]
    #[case::no_properties(json!({ "eventName": "purchase" }))]
    fn track_event_accepts_optional_properties(#[case] arguments: Value) {
        let args = TrackEventArgs::extract(&Payload::from_value(&arguments)).expect("valid");
        assert_eq!(args.event_name, "purchase");
        assert_eq!(
            args.properties.is_some(),
            arguments.get("properties").is_some()
        );
    }

    #[test]
    fn track_screen_and_show_flow_validate_their_fields() {
        let arguments = json!({ "screenName": " ", "flowId": "" });
        let payload = Payload::from_value(&arguments);
        let screen = TrackScreenArgs::extract(&payload).expect_err("blank screen");
        let flow = ShowFlowArgs::extract(&payload).expect_err("blank flow");
        assert_eq!(screen.message(), "Screen name cannot be empty");
        assert_eq!(flow.message(), "Flow ID cannot be empty");
    }
}
