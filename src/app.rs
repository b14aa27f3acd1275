//! Study Desk App
//!
//! Single page: pre-study checklist, focus timer, task lists.

use leptos::prelude::*;
use leptos_reveal::Reveal;

use crate::components::{BelongingsForm, ChecklistView, LogPanel, PhotoPreview, TimerPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::CountStyle;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <main class="page">
            <Reveal class="card">
                <h2>"Before you start"</h2>
                <BelongingsForm />
                <PhotoPreview />
            </Reveal>

            <Reveal class="card">
                <h2>"Focus timer"</h2>
                <TimerPanel />
            </Reveal>

            <Reveal class="card">
                <ChecklistView
                    list_key="tasks"
                    heading="Today's tasks"
                    placeholder="Add a task..."
                    count_style=CountStyle::Slash
                    show_progress_bar=true
                />
            </Reveal>

            <Reveal class="card">
                <ChecklistView
                    list_key="assignments"
                    heading="Assignments"
                    placeholder="Add an assignment..."
                    count_style=CountStyle::OfTotal
                />
            </Reveal>

            <LogPanel />
        </main>
    }
}
