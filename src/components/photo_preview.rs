//! Photo Preview Component
//!
//! Shows the image picked in a file input. Nothing is uploaded; the image is
//! displayed from a temporary object URL.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

const PREVIEW_ALT: &str = "Uploaded photo of your phone placed far away";

#[component]
pub fn PhotoPreview() -> impl IntoView {
    let (preview_url, set_preview_url) = signal(None::<String>);

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                if let Some(previous) = preview_url.get_untracked() {
                    if let Err(e) = web_sys::Url::revoke_object_url(&previous) {
                        log::debug!("could not release {}: {:?}", previous, e);
                    }
                }
                set_preview_url.set(Some(url));
            }
            Err(e) => log::warn!("could not preview {}: {:?}", file.name(), e),
        }
    };

    view! {
        <div class="photo-upload">
            <label for="phoneUpload">"Snap your phone across the room"</label>
            <input id="phoneUpload" type="file" accept="image/*" on:change=on_change />
            <Show when=move || preview_url.get().is_some()>
                <img
                    id="phonePreview"
                    src=move || preview_url.get().unwrap_or_default()
                    alt=PREVIEW_ALT
                />
            </Show>
        </div>
    }
}
