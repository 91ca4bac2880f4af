//! Traits for the host editor surfaces this extension consumes.
//!
//! The host owns the configuration store, the viewport, the modal input
//! box, and the status bar. None of that is reimplemented here; each
//! surface is an injected trait object so handlers can be exercised
//! against fakes in tests.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::types::{ConfigScope, ScrollRequest};

/// A configuration write was rejected by the host's storage layer.
/// The extension performs no recovery; this surfaces as a fatal error.
#[derive(Debug)]
pub struct StoreError {
    pub key: String,
    pub message: String,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write configuration key '{}': {}", self.key, self.message)
    }
}

impl std::error::Error for StoreError {}

/// The host's global key-value configuration store. Values are JSON,
/// matching the host's configuration value model.
pub trait ConfigStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<Value>;

    /// Persists `value` under `key` at the given scope.
    fn update(&self, key: &str, value: Value, scope: ConfigScope) -> Result<(), StoreError>;
}

/// The host's viewport scroll primitive. Fire-and-forget: the request
/// is handed off and the handler does not wait for the scroll to land.
pub trait Viewport: Send + Sync {
    fn scroll(&self, request: ScrollRequest);
}

/// Everything the host needs to show a modal single-line input box.
pub struct InputBoxRequest<'a> {
    /// Pre-filled text.
    pub value: String,
    /// Description of the field shown alongside the input.
    pub prompt: &'a str,
    /// Keystroke-level validation: returns a rejection message while the
    /// current text is not acceptable, `None` once it is.
    pub validate_input: &'a (dyn Fn(&str) -> Option<String> + Sync),
}

#[async_trait]
pub trait HostWindow: Send + Sync {
    /// Displays a modal input box and waits for the user. Resolves to
    /// the submitted text, or `None` if the box was dismissed (escape,
    /// focus loss) without submitting.
    async fn show_input_box(&self, request: InputBoxRequest<'_>) -> Option<String>;

    /// Shows a transient, non-blocking status message for `duration`.
    fn set_status_message(&self, message: &str, duration: Duration);
}
