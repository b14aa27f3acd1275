//! Completion Cue
//!
//! Signal the end of a timer phase. Sound, vibration and alerts depend on
//! what the browser allows; any failure is ignored and the timer keeps going.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::timer::Mode;

/// How the end of a phase is announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueKind {
    /// Short tone plus vibration
    #[default]
    Chime,
    /// Blocking `alert` dialog
    Alert,
    Silent,
}

const CHIME_HZ: f32 = 880.0;
const VIBRATE_PATTERN_MS: [u32; 3] = [60, 30, 60];

/// Best effort: never fails, never panics
pub fn announce(kind: CueKind, next: Mode) {
    let result = match kind {
        CueKind::Chime => chime().map(|_| vibrate()),
        CueKind::Alert => alert(next),
        CueKind::Silent => Ok(()),
    };
    if let Err(err) = result {
        log::debug!("completion cue unavailable: {:?}", err);
    }
}

pub fn alert_text(next: Mode) -> String {
    match next {
        Mode::Work => "Break is over. Back to work!".to_string(),
        Mode::Break => "Work session done. Take a break!".to_string(),
    }
}

fn chime() -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    osc.set_type(OscillatorType::Sine);
    osc.frequency().set_value(CHIME_HZ);
    gain.gain().set_value(0.001);
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start()?;

    let now = ctx.current_time();
    gain.gain().exponential_ramp_to_value_at_time(0.2, now + 0.02)?;
    gain.gain().exponential_ramp_to_value_at_time(0.0001, now + 0.25)?;
    osc.stop_with_when(now + 0.26)?;
    Ok(())
}

fn vibrate() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let pattern: js_sys::Array = VIBRATE_PATTERN_MS.iter().map(|ms| JsValue::from(*ms)).collect();
    // false when the device cannot vibrate
    let _ = win.navigator().vibrate_with_pattern(&pattern);
}

fn alert(next: Mode) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    win.alert_with_message(&alert_text(next))
}
