//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::cue::CueKind;
use crate::storage::BrowserStorage;
use crate::timer::TimerConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Store every view writes through to
    pub storage: BrowserStorage,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            storage: BrowserStorage,
            config: StoredValue::new(config),
        }
    }

    pub fn timer_config(&self) -> TimerConfig {
        self.config.with_value(|c| c.timer)
    }

    pub fn cue(&self) -> CueKind {
        self.config.with_value(|c| c.cue)
    }
}

/// Get the app context, panics outside `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
