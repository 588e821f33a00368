//! Shared doubles for bridge tests.

use std::sync::Mutex;

use mockall::mock;

use crate::operation::Operation;
use crate::payload::Properties;
use crate::sdk::{SdkConfig, SdkFault, SetgreetSdk};

mock! {
    pub Sdk {}
    impl SetgreetSdk for Sdk {
        fn initialize(&self, app_key: String, config: SdkConfig) -> Result<(), SdkFault>;
        fn identify_user(
            &self,
            user_id: String,
            attributes: Option<Properties>,
            operation: Operation,
            locale: Option<String>,
        ) -> Result<(), SdkFault>;
        fn reset_user(&self) -> Result<(), SdkFault>;
        fn track_event(
            &self,
            event_name: String,
            properties: Option<Properties>,
        ) -> Result<(), SdkFault>;
        fn track_screen(
            &self,
            screen_name: String,
            properties: Option<Properties>,
        ) -> Result<(), SdkFault>;
        fn show_flow(&self, flow_id: String) -> Result<(), SdkFault>;
    }
}

/// How the recording SDK answers every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Reply {
    #[default]
    Succeed,
    Fault(Option<String>),
    Panic(String),
}

/// SDK double that records each call it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingSdk {
    reply: Mutex<Reply>,
    calls: Mutex<Vec<String>>,
}

impl RecordingSdk {
    pub(crate) fn replying(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn set_reply(&self, reply: Reply) {
        *self.reply.lock().expect("reply lock") = reply;
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: String) -> Result<(), SdkFault> {
        self.calls.lock().expect("calls lock").push(call);
        let reply = self.reply.lock().expect("reply lock").clone();
        match reply {
            Reply::Succeed => Ok(()),
            Reply::Fault(Some(description)) => Err(SdkFault::new(description)),
            Reply::Fault(None) => Err(SdkFault::opaque()),
            Reply::Panic(message) => panic!("{message}"),
        }
    }
}

impl SetgreetSdk for RecordingSdk {
    fn initialize(&self, app_key: String, config: SdkConfig) -> Result<(), SdkFault> {
        self.record(format!("initialize({app_key}, debug={})", config.debug_mode))
    }

    fn identify_user(
        &self,
        user_id: String,
        attributes: Option<Properties>,
        operation: Operation,
        locale: Option<String>,
    ) -> Result<(), SdkFault> {
        self.record(format!(
            "identify_user({user_id}, attributes={}, {}, locale={})",
            attributes.is_some(),
            operation.as_str(),
            locale.as_deref().unwrap_or("none")
        ))
    }

    fn reset_user(&self) -> Result<(), SdkFault> {
        self.record(String::from("reset_user()"))
    }

    fn track_event(
        &self,
        event_name: String,
        properties: Option<Properties>,
    ) -> Result<(), SdkFault> {
        self.record(format!(
            "track_event({event_name}, properties={})",
            properties.is_some()
        ))
    }

    fn track_screen(
        &self,
        screen_name: String,
        properties: Option<Properties>,
    ) -> Result<(), SdkFault> {
        self.record(format!(
            "track_screen({screen_name}, properties={})",
            properties.is_some()
        ))
    }

    fn show_flow(&self, flow_id: String) -> Result<(), SdkFault> {
        self.record(format!("show_flow({flow_id})"))
    }
}
