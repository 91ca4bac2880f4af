//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::host::{
    ConfigScope, ConfigStore, HostWindow, InputBoxRequest, ScrollRequest, StoreError, Viewport,
};

/// Viewport fake that records every scroll request it receives.
#[derive(Default)]
pub struct RecordingViewport {
    requests: Mutex<Vec<ScrollRequest>>,
}

impl RecordingViewport {
    pub fn requests(&self) -> Vec<ScrollRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Viewport for RecordingViewport {
    fn scroll(&self, request: ScrollRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

/// What [`ScriptedWindow`] observed about one input box invocation.
pub struct SeenPrompt {
    pub value: String,
    pub prompt: String,
    /// Result of probing the live validator the way a host flags
    /// keystroke-level input.
    pub live_rejects_garbage: bool,
    pub live_flags_empty: bool,
}

/// Window fake: answers input boxes from a scripted queue (an exhausted
/// queue means "dismissed") and records every status message.
#[derive(Default)]
pub struct ScriptedWindow {
    responses: Mutex<VecDeque<Option<String>>>,
    pub prompts: Mutex<Vec<SeenPrompt>>,
    statuses: Mutex<Vec<(String, Duration)>>,
}

impl ScriptedWindow {
    /// A window that answers the next input box with `response`
    /// (`None` = dismissed without submitting).
    pub fn replying(response: Option<&str>) -> Self {
        let window = Self::default();
        window.responses.lock().unwrap().push_back(response.map(str::to_string));
        window
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }
}

#[async_trait]
impl HostWindow for ScriptedWindow {
    async fn show_input_box(&self, request: InputBoxRequest<'_>) -> Option<String> {
        self.prompts.lock().unwrap().push(SeenPrompt {
            value: request.value.clone(),
            prompt: request.prompt.to_string(),
            live_rejects_garbage: (request.validate_input)("garbage").is_some(),
            live_flags_empty: (request.validate_input)("").is_some(),
        });
        self.responses.lock().unwrap().pop_front().flatten()
    }

    fn set_status_message(&self, message: &str, duration: Duration) {
        self.statuses.lock().unwrap().push((message.to_string(), duration));
    }
}

/// Store whose writes always fail, for exercising the fatal-write path.
pub struct FailingStore;

impl ConfigStore for FailingStore {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn update(&self, key: &str, _value: Value, _scope: ConfigScope) -> Result<(), StoreError> {
        Err(StoreError { key: key.to_string(), message: "store unavailable".to_string() })
    }
}
