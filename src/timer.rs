//! Work/Break Timer
//!
//! Pure state machine behind the countdown panel. The view owns a
//! `TimerState`, feeds it actions (including one `Tick` per second while
//! running) and renders it with the helpers below.

use serde::{Deserialize, Serialize};

/// Timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Work,
    Break,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::Break => "Break",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Mode::Work => Mode::Break,
            Mode::Break => Mode::Work,
        }
    }

    fn title_icon(&self) -> &'static str {
        match self {
            Mode::Work => "🔶",
            Mode::Break => "🔷",
        }
    }
}

/// Fixed phase lengths in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub work_secs: u32,
    pub break_secs: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }
}

impl TimerConfig {
    pub fn duration(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_secs,
            Mode::Break => self.break_secs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Start,
    Pause,
    Reset,
    Tick,
}

/// What the view has to do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// Stopped -> running: begin ticking
    pub started: bool,
    /// Running -> stopped: cancel the tick
    pub stopped: bool,
    /// A phase ran out and the timer moved to this mode
    pub switched_to: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub mode: Mode,
    pub remaining: u32,
    pub running: bool,
}

impl TimerState {
    /// Work phase, full length, not running
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            mode: Mode::Work,
            remaining: config.work_secs,
            running: false,
        }
    }

    pub fn apply(&mut self, action: TimerAction, config: &TimerConfig) -> Transition {
        let was_running = self.running;
        let mut switched_to = None;

        match action {
            TimerAction::Start => self.running = true,
            TimerAction::Pause => self.running = false,
            TimerAction::Reset => *self = Self::new(config),
            TimerAction::Tick => {
                if self.running {
                    self.remaining = self.remaining.saturating_sub(1);
                    if self.remaining == 0 {
                        self.mode = self.mode.other();
                        self.remaining = config.duration(self.mode);
                        switched_to = Some(self.mode);
                    }
                }
            }
        }

        Transition {
            started: !was_running && self.running,
            stopped: was_running && !self.running,
            switched_to,
        }
    }

    pub fn clock(&self) -> String {
        format_clock(self.remaining)
    }

    pub fn mode_text(&self) -> String {
        format!("Mode: {}", self.mode.label())
    }

    /// Browser tab title mirroring the clock
    pub fn page_title(&self) -> String {
        format!("{} • {} {}", self.clock(), self.mode.label(), self.mode.title_icon())
    }

    /// Sweep of the progress ring in degrees, within 0..=360
    pub fn ring_degrees(&self, config: &TimerConfig) -> f64 {
        let total = config.duration(self.mode);
        if total == 0 {
            return 0.0;
        }
        let elapsed = total as f64 - self.remaining as f64;
        (elapsed / total as f64 * 360.0).clamp(0.0, 360.0)
    }
}

/// Zero-padded `mm:ss`
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
