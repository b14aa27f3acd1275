//! Rolling Logger
//!
//! A `log` backend for browser apps. Every accepted record is written to the
//! devtools console (stderr when not running on wasm32) and the most recent
//! lines are kept in a fixed-size ring buffer so the page can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines kept when the caller has no preference
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a bounded history of formatted lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Calling it a second time returns an error and
/// leaves the first logger in place.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Lines held by the global logger, empty before `init`
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent_lines).unwrap_or_default()
}

fn format_line(record: &Record) -> String {
    format!(
        "{} [{}] {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_at(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_latest_lines() {
        let logger = RollingLogger::new(LevelFilter::Debug, 2);
        log_at(&logger, Level::Info, "first");
        log_at(&logger, Level::Info, "second");
        log_at(&logger, Level::Warn, "third");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] test: second"));
        assert!(lines[1].ends_with("[WARN] test: third"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(LevelFilter::Info, 10);
        log_at(&logger, Level::Debug, "hidden");
        log_at(&logger, Level::Error, "shown");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("shown"));
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::new(LevelFilter::Trace, 0);
        log_at(&logger, Level::Info, "a");
        log_at(&logger, Level::Info, "b");
        assert_eq!(logger.recent_lines().len(), 1);
    }
}
