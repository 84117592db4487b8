//! In-memory flag store

use super::traits::{FlagStore, SessionResult};
use std::sync::Mutex;

/// Keeps the value in process memory; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    value: Mutex<Option<String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value`, as if written by an earlier run
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl FlagStore for MemoryFlagStore {
    fn load(&self) -> SessionResult<Option<String>> {
        Ok(self.value.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn store(&self, value: &str) -> SessionResult<()> {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(value.to_string());
        Ok(())
    }
}
