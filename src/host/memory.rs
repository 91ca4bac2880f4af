//! In-process configuration store.
//!
//! Minimal stand-in for the host's settings storage, used by the demo
//! binary and tests. Not a persistence layer: values live only as long
//! as the process.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::surfaces::{ConfigStore, StoreError};
use super::types::ConfigScope;

#[derive(Default)]
pub struct MemoryConfigStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values
            .lock()
            .expect("config store lock poisoned")
            .get(key)
            .cloned()
    }

    fn update(&self, key: &str, value: Value, _scope: ConfigScope) -> Result<(), StoreError> {
        self.values
            .lock()
            .expect("config store lock poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }
}
