//! Key-value store contract and the rotation state kept in it.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use jiff::Timestamp;
use log::debug;
use serde::Serialize;

use crate::error::{Result, RotaError};

/// Key holding the week counter as a decimal string.
pub const WEEK_KEY: &str = "week";

/// Key holding the RFC 3339 timestamp of the last completed cycle.
pub const LAST_NOTIFIED_KEY: &str = "last_notified";

/// Week counter value used when nothing has been stored yet.
pub const INITIAL_WEEK: u64 = 1;

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Returns the value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Whether `key` has a value.
    fn exists(&self, key: &str) -> Result<bool>;
}

/// In-process store. State is lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.contains_key(key))
    }
}

/// Persisted rotation state.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RotationState {
    /// Week counter used to pick the kitchen assignee
    pub week: u64,

    /// When the last cycle completed; `None` if it never has
    pub last_notified: Option<Timestamp>,
}

impl RotationState {
    /// Reads the state from `store`. Nothing is written; a missing week
    /// counter reads as [`INITIAL_WEEK`] until the first cycle saves it.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let week = if store.exists(WEEK_KEY)? {
            let raw = store.get(WEEK_KEY)?.unwrap_or_default();
            raw.trim()
                .parse::<u64>()
                .map_err(|e| RotaError::invalid_state(WEEK_KEY, format!("{raw:?}: {e}")))?
        } else {
            debug!("No week counter stored, starting at {INITIAL_WEEK}");
            INITIAL_WEEK
        };

        let last_notified = match store.get(LAST_NOTIFIED_KEY)? {
            Some(raw) => Some(raw.trim().parse::<Timestamp>().map_err(|e| {
                RotaError::invalid_state(LAST_NOTIFIED_KEY, format!("{raw:?}: {e}"))
            })?),
            None => None,
        };

        Ok(Self {
            week,
            last_notified,
        })
    }

    /// Writes both values to `store`.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        store.set(WEEK_KEY, &self.week.to_string())?;
        if let Some(last) = self.last_notified {
            store.set(LAST_NOTIFIED_KEY, &last.to_string())?;
        }
        Ok(())
    }

    /// The state after a completed cycle at `now`.
    ///
    /// Fails with [`RotaError::InvalidState`] when the week counter is
    /// already at `u64::MAX`.
    pub fn advanced(&self, now: Timestamp) -> Result<Self> {
        let week = self.week.checked_add(1).ok_or_else(|| {
            RotaError::invalid_state(WEEK_KEY, format!("{} cannot be advanced", self.week))
        })?;
        Ok(Self {
            week,
            last_notified: Some(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_exists() {
        let store = MemoryStore::new();
        assert!(!store.exists("week").unwrap());
        assert_eq!(store.get("week").unwrap(), None);

        store.set("week", "3").unwrap();
        assert!(store.exists("week").unwrap());
        assert_eq!(store.get("week").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_load_defaults_without_writing() {
        let store = MemoryStore::new();
        let state = RotationState::load(&store).unwrap();

        assert_eq!(state.week, INITIAL_WEEK);
        assert_eq!(state.last_notified, None);
        assert!(!store.exists(WEEK_KEY).unwrap());
        assert!(!store.exists(LAST_NOTIFIED_KEY).unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let store = MemoryStore::new();
        let now: Timestamp = "2024-03-10T09:00:00Z".parse().unwrap();
        RotationState {
            week: 12,
            last_notified: None,
        }
        .advanced(now)
        .unwrap()
        .save(&store)
        .unwrap();

        let state = RotationState::load(&store).unwrap();
        assert_eq!(state.week, 13);
        assert_eq!(state.last_notified, Some(now));
    }

    #[test]
    fn test_advance_rejects_exhausted_counter() {
        let state = RotationState {
            week: u64::MAX,
            last_notified: None,
        };

        let err = state.advanced(Timestamp::UNIX_EPOCH).unwrap_err();
        assert!(matches!(err, RotaError::InvalidState { ref key, .. } if key == WEEK_KEY));
    }

    #[test]
    fn test_load_rejects_corrupt_week() {
        let store = MemoryStore::new();
        store.set(WEEK_KEY, "seven").unwrap();

        let err = RotationState::load(&store).unwrap_err();
        assert!(matches!(err, RotaError::InvalidState { ref key, .. } if key == WEEK_KEY));
    }

    #[test]
    fn test_load_rejects_corrupt_timestamp() {
        let store = MemoryStore::new();
        store.set(WEEK_KEY, "2").unwrap();
        store.set(LAST_NOTIFIED_KEY, "last tuesday").unwrap();

        let err = RotationState::load(&store).unwrap_err();
        assert!(matches!(err, RotaError::InvalidState { ref key, .. } if key == LAST_NOTIFIED_KEY));
    }
}
