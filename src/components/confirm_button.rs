//! Confirm Button Component
//!
//! Inline yes/no confirmation in front of a destructive action.

use leptos::prelude::*;

/// Button that asks before a destructive action
///
/// Shows `label` initially. When clicked, shows `prompt` with Yes/No buttons.
/// Either choice returns to the initial button and reports the answer.
///
/// # Arguments
/// * `label` - Text of the initial button (e.g., "Clear all")
/// * `prompt` - Question shown while waiting (e.g., "Clear all items?")
/// * `button_class` - CSS class for the initial button
/// * `on_answer` - Receives `true` for Yes, `false` for No
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_answer: Callback<bool>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="confirm">
                <span class="confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_answer.run(true);
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_answer.run(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
