//! Checklist Model
//!
//! An ordered list of items saved under one storage key. Every accepted
//! action is written back to storage before the view re-renders.

use reactive_stores::Store;

use crate::models::{ChecklistItem, Progress};
use crate::storage::{self, KeyValueStore, StorageResult};

/// User actions on a checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistAction {
    Add(String),
    Toggle(usize, bool),
    Delete(usize),
    Clear,
}

impl ChecklistAction {
    /// Answer to the "Clear all items?" prompt; no means nothing happens
    pub fn clear_if(confirmed: bool) -> Option<Self> {
        confirmed.then_some(ChecklistAction::Clear)
    }
}

/// A named, persisted list
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct Checklist {
    /// Storage key
    pub key: String,
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
        }
    }

    /// Load the list saved under `key`, empty if missing or unreadable
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Self {
        Self {
            key: key.to_string(),
            items: storage::get(store, key, Vec::new()),
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> StorageResult<()> {
        storage::set(store, &self.key, &self.items)
    }

    /// Apply `action` in memory. Returns false when the action was rejected
    /// (blank text, index out of range) and nothing changed.
    pub fn apply(&mut self, action: ChecklistAction) -> bool {
        match action {
            ChecklistAction::Add(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return false;
                }
                self.items.push(ChecklistItem::new(text));
                true
            }
            ChecklistAction::Toggle(index, checked) => match self.items.get_mut(index) {
                Some(item) => {
                    item.done = checked;
                    true
                }
                None => {
                    log::debug!("[{}] toggle ignored, no item at {}", self.key, index);
                    false
                }
            },
            ChecklistAction::Delete(index) => {
                if index >= self.items.len() {
                    log::debug!("[{}] delete ignored, no item at {}", self.key, index);
                    return false;
                }
                self.items.remove(index);
                true
            }
            ChecklistAction::Clear => {
                self.items.clear();
                true
            }
        }
    }

    /// Apply `action` and write the whole list through to `store`
    pub fn dispatch<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        action: ChecklistAction,
    ) -> StorageResult<bool> {
        if !self.apply(action) {
            return Ok(false);
        }
        self.save(store)?;
        Ok(true)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            done: self.items.iter().filter(|item| item.done).count(),
            total: self.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountStyle;
    use crate::storage::{FailingStore, MemoryStore, StorageError};

    fn persisted<S: KeyValueStore>(store: &S, key: &str) -> Vec<ChecklistItem> {
        storage::get(store, key, Vec::new())
    }

    fn texts(list: &Checklist) -> Vec<&str> {
        list.items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_persisted_matches_memory_after_every_action() {
        let store = MemoryStore::new();
        let mut list = Checklist::load(&store, "tasks");
        let actions = vec![
            ChecklistAction::Add("Essay draft".into()),
            ChecklistAction::Add("  Lab report ".into()),
            ChecklistAction::Add("".into()),
            ChecklistAction::Toggle(1, true),
            ChecklistAction::Add("Flashcards".into()),
            ChecklistAction::Delete(0),
            ChecklistAction::Toggle(9, true),
            ChecklistAction::Toggle(0, false),
            ChecklistAction::Delete(5),
            ChecklistAction::Add("Problem set".into()),
            ChecklistAction::Toggle(2, true),
        ];

        for action in actions {
            list.dispatch(&store, action).unwrap();
            // Nothing saved yet when every action so far was rejected
            if store.get_raw("tasks").is_some() {
                assert_eq!(persisted(&store, "tasks"), list.items);
            }
        }
        assert_eq!(texts(&list), vec!["Lab report", "Flashcards", "Problem set"]);
        assert_eq!(Checklist::load(&store, "tasks"), list);
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let store = MemoryStore::new();
        let mut list = Checklist::new("assignments");
        assert!(!list.dispatch(&store, ChecklistAction::Add("".into())).unwrap());
        assert!(!list.dispatch(&store, ChecklistAction::Add("   ".into())).unwrap());
        assert!(list.items.is_empty());
        assert!(store.get_raw("assignments").is_none());
    }

    #[test]
    fn test_delete_shifts_later_items_down() {
        let mut list = Checklist::new("tasks");
        for text in ["a", "b", "c", "d"] {
            list.apply(ChecklistAction::Add(text.into()));
        }
        list.apply(ChecklistAction::Toggle(3, true));

        assert!(list.apply(ChecklistAction::Delete(1)));
        assert_eq!(list.items.len(), 3);
        assert_eq!(texts(&list), vec!["a", "c", "d"]);
        assert!(list.items[2].done);
    }

    #[test]
    fn test_progress_counts_done_items() {
        let mut list = Checklist::new("tasks");
        assert_eq!(list.progress().percent(), 0.0);
        for text in ["a", "b", "c", "d"] {
            list.apply(ChecklistAction::Add(text.into()));
        }
        list.apply(ChecklistAction::Toggle(0, true));
        list.apply(ChecklistAction::Toggle(2, true));

        let progress = list.progress();
        assert_eq!(progress, Progress { done: 2, total: 4 });
        assert_eq!(progress.percent(), 50.0);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let store = MemoryStore::new();
        let mut list = Checklist::load(&store, "assignments");

        list.dispatch(&store, ChecklistAction::Add("Buy milk".into())).unwrap();
        assert_eq!(persisted(&store, "assignments"), vec![ChecklistItem::new("Buy milk")]);

        list.dispatch(&store, ChecklistAction::Toggle(0, true)).unwrap();
        assert_eq!(list.progress().label(CountStyle::OfTotal), "1 of 1 finished");

        list.dispatch(&store, ChecklistAction::Delete(0)).unwrap();
        assert!(persisted(&store, "assignments").is_empty());
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let store = MemoryStore::new().with_raw("tasks", "[{\"text\": oops");
        let list = Checklist::load(&store, "tasks");
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let store = MemoryStore::new();
        let mut list = Checklist::new("tasks");
        list.dispatch(&store, ChecklistAction::Add("x".into())).unwrap();
        list.dispatch(&store, ChecklistAction::Clear).unwrap();
        assert_eq!(store.get_raw("tasks").as_deref(), Some("[]"));
    }

    #[test]
    fn test_declined_clear_leaves_storage_untouched() {
        let store = MemoryStore::new();
        let mut list = Checklist::new("tasks");
        list.dispatch(&store, ChecklistAction::Add("Essay".into())).unwrap();
        list.dispatch(&store, ChecklistAction::Toggle(0, true)).unwrap();
        let before = store.get_raw("tasks");

        assert_eq!(ChecklistAction::clear_if(false), None);
        if let Some(action) = ChecklistAction::clear_if(false) {
            list.dispatch(&store, action).unwrap();
        }

        assert_eq!(store.get_raw("tasks"), before);
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_confirmed_clear_empties_list() {
        let store = MemoryStore::new();
        let mut list = Checklist::new("tasks");
        list.dispatch(&store, ChecklistAction::Add("Essay".into())).unwrap();

        let action = ChecklistAction::clear_if(true).unwrap();
        assert!(list.dispatch(&store, action).unwrap());
        assert!(list.items.is_empty());
        assert_eq!(store.get_raw("tasks").as_deref(), Some("[]"));
    }

    #[test]
    fn test_write_failure_keeps_change_in_memory() {
        let store = FailingStore::with_raw("tasks", r#"[{"text":"Essay","done":false}]"#);
        let mut list = Checklist::load(&store, "tasks");

        let err = list.dispatch(&store, ChecklistAction::Add("Lab report".into())).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(texts(&list), vec!["Essay", "Lab report"]);

        assert!(list.dispatch(&store, ChecklistAction::Toggle(0, true)).is_err());
        assert!(list.items[0].done);
        assert_eq!(persisted(&store, "tasks"), vec![ChecklistItem::new("Essay")]);
    }
}
