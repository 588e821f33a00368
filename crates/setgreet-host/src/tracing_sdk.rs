//! Collaborator used by the harness in place of a native SDK.

use tracing::info;

use setgreet_bridge::{Operation, Properties, SdkConfig, SdkFault, SetgreetSdk};

const SDK_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::sdk");

/// SDK stand-in that logs every call and always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSdk;

fn property_count(properties: Option<&Properties>) -> usize {
    properties.map_or(0, Properties::len)
}

impl SetgreetSdk for TracingSdk {
    fn initialize(&self, app_key: String, config: SdkConfig) -> Result<(), SdkFault> {
        info!(
            target: SDK_TARGET,
            app_key = app_key.as_str(),
            debug_mode = config.debug_mode,
            "initialize"
        );
        Ok(())
    }

    fn identify_user(
        &self,
        user_id: String,
        attributes: Option<Properties>,
        operation: Operation,
        locale: Option<String>,
    ) -> Result<(), SdkFault> {
        info!(
            target: SDK_TARGET,
            user_id = user_id.as_str(),
            attributes = property_count(attributes.as_ref()),
            operation = operation.as_str(),
            locale = locale.as_deref(),
            "identify_user"
        );
        Ok(())
    }

    fn reset_user(&self) -> Result<(), SdkFault> {
        info!(target: SDK_TARGET, "reset_user");
        Ok(())
    }

    fn track_event(
        &self,
        event_name: String,
        properties: Option<Properties>,
    ) -> Result<(), SdkFault> {
        info!(
            target: SDK_TARGET,
            event_name = event_name.as_str(),
            properties = property_count(properties.as_ref()),
            "track_event"
        );
        Ok(())
    }

    fn track_screen(
        &self,
        screen_name: String,
        properties: Option<Properties>,
    ) -> Result<(), SdkFault> {
        info!(
            target: SDK_TARGET,
            screen_name = screen_name.as_str(),
            properties = property_count(properties.as_ref()),
            "track_screen"
        );
        Ok(())
    }

    fn show_flow(&self, flow_id: String) -> Result<(), SdkFault> {
        info!(target: SDK_TARGET, flow_id = flow_id.as_str(), "show_flow");
        Ok(())
    }
}
