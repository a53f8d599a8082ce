//! # Screen State Registry
//!
//! Small pieces of screen state that must outlive a configuration change
//! (terminal resize) but not a process restart. Today that is one counter,
//! the floating button's `fabCount`.
//!
//! The registry is owned by `App`, not by any screen, so navigating away
//! from Home and back does not reset the counter. Across a configuration
//! change the host takes a `snapshot()` and feeds it to `restore()` on the
//! recreated instance. A cold start never sees a snapshot and begins at 0.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::mpsc::Receiver;
use thiserror::Error;

use crate::core::navigation::NavError;
use crate::core::notify::{Change, Subscribers};

/// Key of the Home screen's floating-button counter.
pub const FAB_COUNT: &str = "fabCount";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is empty")]
    Empty,
    #[error("snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("saved back stack rejected: {0}")]
    BackStack(#[from] NavError),
}

/// Serializable copy of every registry value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub values: BTreeMap<String, i64>,
}

impl StateSnapshot {
    pub fn to_blob(&self) -> String {
        // A map of strings to integers always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_blob(blob: &str) -> Result<Self, SnapshotError> {
        if blob.trim().is_empty() {
            return Err(SnapshotError::Empty);
        }
        Ok(serde_json::from_str(blob)?)
    }
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct ScreenStateView<'a> {
    values: &'a BTreeMap<String, i64>,
}

impl ScreenStateView<'_> {
    pub fn get(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct ScreenStateRegistry {
    values: BTreeMap<String, i64>,
    subscribers: Subscribers,
}

impl ScreenStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    pub fn set(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
        debug!("screen state {key} = {value}");
        self.subscribers.notify(Change::Field(key.to_string()));
    }

    /// `set(key, get(key) + 1)`, returning the new value.
    pub fn increment(&mut self, key: &str) -> i64 {
        let next = self.get(key).saturating_add(1);
        self.set(key, next);
        next
    }

    pub fn view(&self) -> ScreenStateView<'_> {
        ScreenStateView {
            values: &self.values,
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            values: self.values.clone(),
        }
    }

    /// Replace every value with the snapshot's. `None` resets to defaults.
    pub fn restore(&mut self, snapshot: Option<StateSnapshot>) {
        let values = snapshot.map(|s| s.values).unwrap_or_default();
        let touched: Vec<String> = self.values.keys().chain(values.keys()).cloned().collect();
        self.values = values;
        for key in touched {
            self.subscribers.notify(Change::Field(key));
        }
    }

    /// Decode and restore. Missing or corrupt blobs fall back to defaults.
    pub fn restore_blob(&mut self, blob: Option<&str>) {
        let snapshot = match blob.map(StateSnapshot::from_blob) {
            Some(Ok(snapshot)) => Some(snapshot),
            Some(Err(e)) => {
                warn!("Discarding screen state snapshot: {e}");
                None
            }
            None => None,
        };
        self.restore(snapshot);
    }

    pub fn subscribe(&mut self) -> Receiver<Change> {
        self.subscribers.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_key_reads_zero() {
        let registry = ScreenStateRegistry::new();
        assert_eq!(registry.get(FAB_COUNT), 0);
        assert_eq!(registry.view().get(FAB_COUNT), 0);
    }

    #[test]
    fn test_increment_k_times() {
        let mut registry = ScreenStateRegistry::new();
        for _ in 0..7 {
            let prev = registry.get(FAB_COUNT);
            registry.set(FAB_COUNT, prev + 1);
        }
        assert_eq!(registry.get(FAB_COUNT), 7);
        assert_eq!(registry.increment(FAB_COUNT), 8);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut registry = ScreenStateRegistry::new();
        registry.set("a", 3);
        registry.increment("b");
        assert_eq!(registry.get("a"), 3);
        assert_eq!(registry.get("b"), 1);
        registry.set("a", 10);
        assert_eq!(registry.get("b"), 1);
    }

    #[test]
    fn test_snapshot_restore_carries_values() {
        let mut registry = ScreenStateRegistry::new();
        for _ in 0..5 {
            registry.increment(FAB_COUNT);
        }
        let blob = registry.snapshot().to_blob();

        let mut recreated = ScreenStateRegistry::new();
        recreated.restore_blob(Some(&blob));
        assert_eq!(recreated.get(FAB_COUNT), 5);
    }

    #[test]
    fn test_restore_without_snapshot_resets() {
        let mut registry = ScreenStateRegistry::new();
        registry.set(FAB_COUNT, 4);
        registry.restore(None);
        assert_eq!(registry.get(FAB_COUNT), 0);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_defaults() {
        let mut registry = ScreenStateRegistry::new();
        registry.set(FAB_COUNT, 9);
        registry.restore_blob(Some("{not json"));
        assert_eq!(registry.get(FAB_COUNT), 0);

        registry.set(FAB_COUNT, 9);
        registry.restore_blob(Some("   "));
        assert_eq!(registry.get(FAB_COUNT), 0);
    }

    #[test]
    fn test_from_blob_errors() {
        assert!(matches!(StateSnapshot::from_blob(""), Err(SnapshotError::Empty)));
        assert!(matches!(
            StateSnapshot::from_blob("[1, 2]"),
            Err(SnapshotError::Decode(_))
        ));
        // Missing `values` is an empty snapshot, not an error.
        assert_eq!(StateSnapshot::from_blob("{}").unwrap(), StateSnapshot::default());
    }

    #[test]
    fn test_set_notifies_field_change() {
        let mut registry = ScreenStateRegistry::new();
        let rx = registry.subscribe();
        registry.increment(FAB_COUNT);
        assert_eq!(rx.try_recv().unwrap(), Change::Field(FAB_COUNT.to_string()));
    }
}
