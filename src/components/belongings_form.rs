//! Belongings Form Component
//!
//! Fixed set of "before you start" checkboxes, remembered between visits.

use leptos::prelude::*;

use crate::belongings::{FlagAction, FlagSet};
use crate::context::use_app_context;
use crate::models::CountStyle;

/// Checkbox keys and labels, in display order
pub const BELONGINGS: &[(&str, &str)] = &[
    ("phone", "Phone in another room"),
    ("notifications", "Notifications silenced"),
    ("water", "Water bottle filled"),
    ("materials", "Books and notes out"),
    ("charger", "Laptop charged"),
];

#[component]
pub fn BelongingsForm(
    #[prop(into, default = "belongings".to_string())]
    list_key: String,
) -> impl IntoView {
    let storage = use_app_context().storage;
    let keys = BELONGINGS.iter().map(|(key, _)| key.to_string()).collect();
    let flags = RwSignal::new(FlagSet::load(&storage, &list_key, keys));

    let dispatch = move |action: FlagAction| {
        flags.update(|set| {
            if let Err(e) = set.dispatch(&storage, action) {
                log::error!("[{}] could not save checkboxes: {}", set.key, e);
            }
        });
    };

    view! {
        <form id=format!("{}-form", list_key) class="belongings" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            {BELONGINGS.iter().map(move |&(key, label)| view! {
                <label class="belonging">
                    <input
                        type="checkbox"
                        data-key=key
                        prop:checked=move || flags.with(|set| set.is_checked(key))
                        on:change=move |ev| dispatch(FlagAction::Set(key.to_string(), event_target_checked(&ev)))
                    />
                    <span>{label}</span>
                </label>
            }).collect_view()}

            <p class="count">{move || flags.with(|set| set.progress()).label(CountStyle::Complete)}</p>

            <button
                type="button"
                id=format!("clear-{}", list_key)
                class="clear-btn"
                on:click=move |_| dispatch(FlagAction::Clear)
            >
                "Uncheck all"
            </button>
        </form>
    }
}
