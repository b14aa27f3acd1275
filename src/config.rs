//! App Configuration
//!
//! Optional overrides saved under the `settings` storage key. Every field
//! has a default, so a missing or partial entry still yields a full config.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cue::CueKind;
use crate::storage::{self, KeyValueStore};
use crate::timer::TimerConfig;

pub const SETTINGS_KEY: &str = "settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Lines kept by the in-page log buffer
    pub log_capacity: usize,
    pub timer: TimerConfig,
    pub cue: CueKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
            timer: TimerConfig::default(),
            cue: CueKind::default(),
        }
    }
}

impl AppConfig {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        storage::get(store, SETTINGS_KEY, Self::default())
    }

    /// Unknown names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
