//! The "reuse previous matches" flag

use super::file::FileFlagStore;
use super::traits::{FlagStore, OpenFlagStore, SessionResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Which graphs the next match run searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// The whole database
    Full,
    /// Only the graphs matched by the previous run
    ReusePrevious,
}

impl SearchMode {
    /// Trailing matcher argument selecting this mode, if any
    pub fn matcher_flag(self) -> Option<&'static str> {
        match self {
            Self::Full => None,
            Self::ReusePrevious => Some("reuse"),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Full => "Full database search",
            Self::ReusePrevious => "Using previous matches",
        }
    }
}

/// Persistent reuse flag
///
/// The stored text is `true` or `false`. Every accessor goes back to the
/// store; nothing is cached, since other requests may have changed the value.
/// Anything other than a readable `true` counts as `false`, which keeps the
/// next run on the full database.
#[derive(Clone)]
pub struct SessionState {
    store: Arc<dyn FlagStore>,
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState").finish_non_exhaustive()
    }
}

impl SessionState {
    pub fn new(store: Arc<dyn FlagStore>) -> Self {
        Self { store }
    }

    /// State backed by the flag file at `path`
    pub fn open(path: impl AsRef<Path>) -> SessionResult<Self> {
        Ok(Self::new(Arc::new(FileFlagStore::open(path)?)))
    }

    /// Current flag value
    pub fn read(&self) -> bool {
        match self.store.load() {
            Ok(Some(text)) => text.trim() == "true",
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "cannot read rerun state, assuming full search");
                false
            }
        }
    }

    /// Overwrite the flag
    pub fn write(&self, value: bool) -> SessionResult<()> {
        self.store
            .store(if value { "true" } else { "false" })
            .map_err(|e| {
                warn!(value, error = %e, "cannot write rerun state");
                e
            })
    }

    /// Process start: discard whatever an earlier run left behind
    pub fn initialize(&self) -> SessionResult<()> {
        self.write(false)?;
        info!("initialized rerun state to false");
        Ok(())
    }

    /// Flip the stored value; returns the new value
    pub fn toggle(&self) -> SessionResult<bool> {
        let value = !self.read();
        self.write(value)?;
        info!(reuse = value, "toggled rerun state");
        Ok(value)
    }

    /// Force the next run back to a full search
    pub fn reset(&self) -> SessionResult<()> {
        self.write(false)?;
        info!("reset rerun state");
        Ok(())
    }

    /// Apply the outcome of a finished match run; returns the flag afterwards
    ///
    /// A successful run enables reuse for the next query. A failed run leaves
    /// the flag untouched.
    pub fn record_match_outcome(&self, success: bool) -> SessionResult<bool> {
        if success {
            self.write(true)?;
            info!("reuse mode enabled for next query");
            Ok(true)
        } else {
            Ok(self.read())
        }
    }

    /// Search mode for the next match run
    pub fn search_mode(&self) -> SearchMode {
        if self.read() {
            SearchMode::ReusePrevious
        } else {
            SearchMode::Full
        }
    }
}
