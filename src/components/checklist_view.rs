//! Checklist View Component
//!
//! A user-built list: add form, rows with checkbox and remove button,
//! completion count, optional progress bar and a clear button that asks first.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::checklist::{Checklist, ChecklistAction, ChecklistStoreFields};
use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::models::CountStyle;

/// Persisted checklist saved under `list_key`
#[component]
pub fn ChecklistView(
    /// Storage key; also prefixes the element ids
    #[prop(into)]
    list_key: String,
    #[prop(into)]
    heading: String,
    #[prop(into, default = "Add an item...".to_string())]
    placeholder: String,
    #[prop(default = CountStyle::OfTotal)]
    count_style: CountStyle,
    /// Show a bar filled to the completion percentage
    #[prop(optional)]
    show_progress_bar: bool,
) -> impl IntoView {
    let storage = use_app_context().storage;
    let checklist = Store::new(Checklist::load(&storage, &list_key));
    let (new_text, set_new_text) = signal(String::new());

    let dispatch = move |action: ChecklistAction| {
        checklist.update(|list| {
            if let Err(e) = list.dispatch(&storage, action) {
                log::error!("[{}] could not save list: {}", list.key, e);
            }
        });
    };

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        dispatch(ChecklistAction::Add(text));
        set_new_text.set(String::new());
    };

    let answer_clear = Callback::new(move |confirmed: bool| {
        if let Some(action) = ChecklistAction::clear_if(confirmed) {
            dispatch(action);
        }
    });
    let progress = move || checklist.with(|list| list.progress());

    let rows = move || {
        checklist
            .items()
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let remove_label = format!("Remove {}", item.text);
                view! {
                    <li class=if item.done { "task done" } else { "task" }>
                        <input
                            type="checkbox"
                            prop:checked=item.done
                            on:change=move |ev| {
                                dispatch(ChecklistAction::Toggle(index, event_target_checked(&ev)))
                            }
                        />
                        <span class="title">{item.text}</span>
                        <button
                            type="button"
                            class="remove"
                            title="Remove item"
                            aria-label=remove_label
                            on:click=move |_| dispatch(ChecklistAction::Delete(index))
                        >
                            "✕"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="checklist">
            <h2>{heading}</h2>

            <form class="adder" id=format!("{}-form", list_key) on:submit=add_item>
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <ul id=format!("{}-list", list_key)>{rows}</ul>

            <p class="count" id=format!("{}-count", list_key)>
                {move || progress().label(count_style)}
            </p>

            {show_progress_bar.then(|| view! {
                <div class="progress">
                    <div class="bar" style:width=move || format!("{}%", progress().percent())></div>
                </div>
            })}

            <ConfirmButton
                label="Clear all"
                prompt="Clear all items?"
                button_class="clear-btn"
                on_answer=answer_clear
            />
        </div>
    }
}
