//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};

/// One entry of a user-built checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Older task lists were saved with `title`
    #[serde(alias = "title")]
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// Completion totals shown under a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    /// Percentage of finished entries, 0 for an empty list
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64 * 100.0
        }
    }

    pub fn label(&self, style: CountStyle) -> String {
        match style {
            CountStyle::Complete => format!("{} complete", self.done),
            CountStyle::OfTotal => format!("{} of {} finished", self.done, self.total),
            CountStyle::Slash => format!("{} / {} finished", self.done, self.total),
        }
    }
}

/// How a list words its completion count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountStyle {
    /// "3 complete"
    Complete,
    /// "3 of 5 finished"
    #[default]
    OfTotal,
    /// "3 / 5 finished"
    Slash,
}
