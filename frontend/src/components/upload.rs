//! Sequence file upload form.
//!
//! Picking a file only records it; the upload starts on submit.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::state::{Action, SelectedFile, UploadState};
use crate::ACCEPTED_EXTENSIONS;

#[component]
pub fn UploadForm(
    state: ReadSignal<UploadState<File>>,
    dispatch: Callback<Action<File>>,
) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| SelectedFile {
                name: file.name(),
                payload: file,
            });

        dispatch.call(Action::SelectFile(selected));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch.call(Action::Submit);
    };

    // Clicking the drop zone opens the hidden picker
    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id("fileInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    let file_name = move || state.with(|s| s.file.as_ref().map(|f| f.name.clone()));
    let is_submitting = move || state.with(|s| s.is_submitting());

    view! {
        <form class="upload-form" on:submit=on_submit>
            <div class="input-group">
                <label for="fileInput" class="upload-label">"Upload DNA Sequence File:"</label>
                <div class="upload-zone" on:click=trigger_file_input>
                    <div class="upload-icon">"🧬"</div>
                    <div class="upload-text">
                        {move || file_name().unwrap_or_else(|| "Choose a .fasta or .bam file".to_string())}
                    </div>
                </div>
                <input
                    type="file"
                    id="fileInput"
                    accept=ACCEPTED_EXTENSIONS
                    style="display:none"
                    on:change=on_file_change
                />
            </div>

            <button type="submit" class="upload-button">
                {move || if is_submitting() { "⏳ Analyzing..." } else { "Analyze File" }}
            </button>

            <Show
                when=move || state.with(|s| s.error.is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </div>
            </Show>
        </form>
    }
}
