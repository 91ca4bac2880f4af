//! # Ratio Setting
//!
//! Accessor for the one configuration value this extension owns. Reads
//! are pull-based: every scroll invocation asks the store again, so a
//! ratio changed elsewhere is picked up immediately. Writes land at
//! global scope and carry no validation of their own; callers validate
//! first (see `core::validate`).

use std::sync::Arc;

use log::warn;
use serde_json::json;

use crate::host::{ConfigScope, ConfigStore, StoreError};

/// Fully-qualified configuration key for the scroll ratio.
pub const RATIO_KEY: &str = "partial-navigation.ratio";

/// Declared default, used when the store has no value for [`RATIO_KEY`].
pub const DEFAULT_RATIO: f64 = 0.5;

#[derive(Clone)]
pub struct RatioSetting {
    store: Arc<dyn ConfigStore>,
    default: f64,
}

impl RatioSetting {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store, default: DEFAULT_RATIO }
    }

    /// The currently configured ratio. Never fails: a missing or
    /// non-numeric stored value falls back to the declared default.
    pub fn read(&self) -> f64 {
        match self.store.get(RATIO_KEY) {
            Some(value) => match value.as_f64() {
                Some(ratio) => ratio,
                None => {
                    warn!("stored ratio {value} is not a number, using default {}", self.default);
                    self.default
                }
            },
            None => self.default,
        }
    }

    /// Persists `ratio` at global scope. The value is written as given;
    /// validation is the caller's job. A store failure propagates.
    pub fn write(&self, ratio: f64) -> Result<(), StoreError> {
        self.store.update(RATIO_KEY, json!(ratio), ConfigScope::Global)
    }
}
