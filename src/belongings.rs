//! Fixed-key Checklist
//!
//! Checkboxes whose keys are fixed by the page (the belongings list).
//! Saved as a JSON object of key -> checked.

use std::collections::BTreeMap;

use crate::models::Progress;
use crate::storage::{self, KeyValueStore, StorageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagAction {
    Set(String, bool),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSet {
    pub key: String,
    /// Keys rendered on the page, in display order
    pub keys: Vec<String>,
    /// Saved flags; may hold keys no longer on the page
    pub flags: BTreeMap<String, bool>,
}

impl FlagSet {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str, keys: Vec<String>) -> Self {
        Self {
            key: key.to_string(),
            keys,
            flags: storage::get(store, key, BTreeMap::new()),
        }
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Apply in memory. Keys that are not on the page are rejected.
    pub fn apply(&mut self, action: FlagAction) -> bool {
        match action {
            FlagAction::Set(key, checked) => {
                if !self.keys.contains(&key) {
                    log::debug!("[{}] unknown checkbox {:?}", self.key, key);
                    return false;
                }
                self.flags.insert(key, checked);
                true
            }
            FlagAction::Clear => {
                for key in &self.keys {
                    self.flags.insert(key.clone(), false);
                }
                true
            }
        }
    }

    pub fn dispatch<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        action: FlagAction,
    ) -> StorageResult<bool> {
        if !self.apply(action) {
            return Ok(false);
        }
        storage::set(store, &self.key, &self.flags)?;
        Ok(true)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            done: self.keys.iter().filter(|k| self.is_checked(k)).count(),
            total: self.keys.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FailingStore, MemoryStore};

    fn keys() -> Vec<String> {
        vec!["phone".into(), "laptop".into(), "charger".into()]
    }

    #[test]
    fn test_restores_saved_flags() {
        let store = MemoryStore::new().with_raw("belongings", r#"{"phone":true,"keys":true}"#);
        let set = FlagSet::load(&store, "belongings", keys());
        assert!(set.is_checked("phone"));
        assert!(!set.is_checked("laptop"));
        assert_eq!(set.progress().done, 1);
        assert_eq!(set.progress().total, 3);
    }

    #[test]
    fn test_clear_unchecks_every_key_without_removing_them() {
        let store = MemoryStore::new();
        let mut set = FlagSet::load(&store, "belongings", keys());
        set.dispatch(&store, FlagAction::Set("phone".into(), true)).unwrap();
        set.dispatch(&store, FlagAction::Set("charger".into(), true)).unwrap();

        set.dispatch(&store, FlagAction::Clear).unwrap();

        let saved: BTreeMap<String, bool> = storage::get(&store, "belongings", BTreeMap::new());
        assert_eq!(saved.len(), 3);
        assert!(saved.values().all(|checked| !checked));
        assert_eq!(set.progress().done, 0);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let store = MemoryStore::new();
        let mut set = FlagSet::load(&store, "belongings", keys());
        assert!(!set.dispatch(&store, FlagAction::Set("wallet".into(), true)).unwrap());
        assert!(store.get_raw("belongings").is_none());
    }

    #[test]
    fn test_corrupt_entry_loads_unchecked() {
        let store = MemoryStore::new().with_raw("belongings", "[1,2");
        let set = FlagSet::load(&store, "belongings", keys());
        assert!(set.flags.is_empty());
        assert_eq!(set.progress().done, 0);
    }

    #[test]
    fn test_write_failure_keeps_flags_in_memory() {
        let store = FailingStore::with_raw("belongings", r#"{"phone":true}"#);
        let mut set = FlagSet::load(&store, "belongings", keys());

        assert!(set.dispatch(&store, FlagAction::Set("laptop".into(), true)).is_err());
        assert!(set.is_checked("laptop"));

        assert!(set.dispatch(&store, FlagAction::Clear).is_err());
        assert!(!set.is_checked("phone"));
        assert_eq!(store.get_raw("belongings").as_deref(), Some(r#"{"phone":true}"#));
    }
}
