//! Disease detection page.
//!
//! Picking a file reads it, shows a preview, and submits straight away;
//! there is no separate submit button.

use forms::endpoints::DiseaseDetection;
use leptos::prelude::*;

use super::panel::summary_panel;
use crate::state::submit::form_signal;

#[component]
pub fn DiseasePage() -> impl IntoView {
    let state = form_signal::<DiseaseDetection>();
    let preview = RwSignal::new(None::<String>);
    let read_error = RwSignal::new(None::<String>);
    let loading = move || state.with(forms::RemoteForm::is_loading);

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use forms::endpoints::disease::IMAGE_FIELD;
            use forms::image::{data_uri, encode_image};
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Picking the same file again must fire `change`.
            input.set_value("");
            read_error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::read_file(&file).await {
                    Ok(bytes) => {
                        preview.set(Some(data_uri(&file.type_(), &bytes)));
                        crate::state::submit::set_field(state, IMAGE_FIELD, encode_image(&bytes));
                        crate::state::submit::submit::<DiseaseDetection>(state);
                    }
                    Err(e) => {
                        log::warn!("image read failed: {e}");
                        read_error.set(Some(format!("Could not read image: {e}")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, preview, read_error, state);
        }
    };

    view! {
        <section class="page-section">
            <h1>"Detect Crop Diseases"</h1>
            <p class="page-section__intro">
                "Upload a photo of an affected leaf or plant to identify the disease."
            </p>
            <div class="form-card">
                <label class="form-field__label" for="crop-image">
                    "Crop Image"
                </label>
                <input
                    class="form-field__input"
                    id="crop-image"
                    type="file"
                    accept="image/*"
                    disabled=loading
                    on:change=on_pick
                />
                <Show when=move || read_error.get().is_some()>
                    <p class="form-field__error">{move || read_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || preview.get().is_some()>
                    <img
                        class="image-preview"
                        alt="Selected crop"
                        src=move || preview.get().unwrap_or_default()
                    />
                </Show>
            </div>
            {summary_panel(state)}
        </section>
    }
}
