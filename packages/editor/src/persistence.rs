//! Best-effort persistence of the editing state
//!
//! The saved record carries the serialized live markup, the structured
//! instances used for restoration, the style state and a timestamp. Records
//! older than seven days are ignored on load but left in storage.

use crate::{ComponentInstance, EditorError, StyleState};
use landkit_common::Storage;
use serde::{Deserialize, Serialize};

/// Storage key of the saved record
pub const STATE_KEY: &str = "landing-page-state";

/// Saved records older than this are not offered for restore
pub const RESTORE_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Interval between periodic saves
pub const AUTOSAVE_INTERVAL_MS: i64 = 30_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub html: String,

    #[serde(default)]
    pub instances: Vec<ComponentInstance>,

    #[serde(default)]
    pub styles: StyleState,

    /// Epoch milliseconds
    pub timestamp: i64,
}

impl SavedState {
    /// Whether the record is young enough to offer for restore
    pub fn is_recent(&self, now_millis: i64) -> bool {
        self.timestamp > now_millis - RESTORE_WINDOW_MS
    }
}

pub fn save_state(storage: &mut dyn Storage, state: &SavedState) -> Result<(), EditorError> {
    let json = serde_json::to_string(state)?;
    storage.write(STATE_KEY, &json)?;
    tracing::debug!(
        instances = state.instances.len(),
        timestamp = state.timestamp,
        "saved editor state"
    );
    Ok(())
}

pub fn load_state(storage: &dyn Storage) -> Result<Option<SavedState>, EditorError> {
    match storage.read(STATE_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Load the saved record if present, readable and recent
///
/// Failures are logged and reported as "no saved state".
pub fn load_recent(storage: &dyn Storage, now_millis: i64) -> Option<SavedState> {
    match load_state(storage) {
        Ok(Some(state)) if state.is_recent(now_millis) => Some(state),
        Ok(Some(state)) => {
            tracing::info!(timestamp = state.timestamp, "saved state is too old, ignoring");
            None
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load saved state");
            None
        }
    }
}

/// Periodic save schedule
#[derive(Debug, Clone)]
pub struct AutoSave {
    interval_ms: i64,
    last_saved: Option<i64>,
}

impl AutoSave {
    pub fn new() -> Self {
        Self::with_interval(AUTOSAVE_INTERVAL_MS)
    }

    pub fn with_interval(interval_ms: i64) -> Self {
        Self {
            interval_ms,
            last_saved: None,
        }
    }

    /// Whether a save should run at `now_millis`
    ///
    /// The first tick only starts the clock.
    pub fn is_due(&mut self, now_millis: i64) -> bool {
        match self.last_saved {
            Some(last) => now_millis - last >= self.interval_ms,
            None => {
                self.last_saved = Some(now_millis);
                false
            }
        }
    }

    pub fn mark_saved(&mut self, now_millis: i64) {
        self.last_saved = Some(now_millis);
    }

    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }
}

impl Default for AutoSave {
    fn default() -> Self {
        Self::new()
    }
}
