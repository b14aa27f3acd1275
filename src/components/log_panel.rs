//! Log Panel Component
//!
//! Recent log lines from the rolling logger, for checking what the page did
//! without opening devtools.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move |_| set_lines.set(rolling_logger::recent_lines());

    view! {
        <details class="log-panel">
            <summary>"Activity log"</summary>
            <button type="button" class="small" on:click=refresh>"Refresh"</button>
            <pre>{move || lines.get().join("\n")}</pre>
        </details>
    }
}
