//! Timer Panel Component
//!
//! Work/break countdown with a conic progress ring. The tab title mirrors
//! the clock. State lives only in this component and resets on reload.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::cue::{self, CueKind};
use crate::timer::{TimerAction, TimerConfig, TimerState, Transition};

const TICK_MS: u32 = 1_000;

/// Apply one action and fire the completion cue if a phase ended
fn step(
    state: RwSignal<TimerState>,
    config: TimerConfig,
    cue_kind: CueKind,
    action: TimerAction,
) -> Transition {
    let mut next = state.get_untracked();
    let transition = next.apply(action, &config);
    state.set(next);

    if let Some(mode) = transition.switched_to {
        log::info!("timer phase over, now {}", mode.label());
        cue::announce(cue_kind, mode);
    }
    transition
}

#[component]
pub fn TimerPanel() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.timer_config();
    let cue_kind = ctx.cue();

    let state = RwSignal::new(TimerState::new(&config));
    // Dropping the interval cancels it
    let ticker = StoredValue::new_local(None::<Interval>);

    let run = move |action: TimerAction| {
        let transition = step(state, config, cue_kind, action);
        if transition.stopped {
            ticker.set_value(None);
        }
        if transition.started {
            let interval = Interval::new(TICK_MS, move || {
                step(state, config, cue_kind, TimerAction::Tick);
            });
            ticker.set_value(Some(interval));
        }
    };

    Effect::new(move |_| {
        let title = state.with(|s| s.page_title());
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&title);
        }
    });

    view! {
        <div class="timer">
            <div
                id="ring"
                class="ring"
                style=move || format!("--p: {}deg", state.with(|s| s.ring_degrees(&config)))
            >
                <div id="clock" class="clock">{move || state.with(|s| s.clock())}</div>
            </div>
            <p id="mode-label" class="mode-label">{move || state.with(|s| s.mode_text())}</p>
            <div class="timer-controls">
                <button id="start" type="button" on:click=move |_| run(TimerAction::Start)>"Start"</button>
                <button id="pause" type="button" on:click=move |_| run(TimerAction::Pause)>"Pause"</button>
                <button id="reset" type="button" on:click=move |_| run(TimerAction::Reset)>"Reset"</button>
            </div>
        </div>
    }
}
