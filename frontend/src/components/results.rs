//! Analysis results panel.
//!
//! Renders a [`ResultsModel`]; which lines appear is decided there.

use std::rc::Rc;

use leptos::*;
use web_sys::File;

use super::HistogramChart;
use crate::format::ResultsModel;
use crate::state::{Action, UploadState};

#[component]
pub fn ResultsView(
    state: ReadSignal<UploadState<File>>,
    dispatch: Callback<Action<File>>,
) -> impl IntoView {
    // The result only changes on submit (generation) or on response (phase)
    let result_key = create_memo(move |_| state.with(|s| (s.generation, s.phase)));
    let show_sequence = move || state.with(|s| s.show_sequence);

    move || {
        let _ = result_key.get();
        let result = state.with_untracked(|s| s.result.clone())?;
        let model = Rc::new(ResultsModel::from_result(&result));
        let has_sequence = model.reverse_complement.is_some();

        Some(view! {
            <div class="results">
                <h2>"Analysis Results"</h2>

                {model
                    .stats
                    .iter()
                    .map(|line| view! { <p class="stat">{line.clone()}</p> })
                    .collect_view()}

                {has_sequence.then(|| {
                    let model = Rc::clone(&model);
                    view! {
                        <div class="reverse-complement">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| dispatch.call(Action::ToggleSequence)
                            >
                                {move || if show_sequence() {
                                    "Hide Reverse Complement"
                                } else {
                                    "Show Reverse Complement"
                                }}
                            </button>
                            {move || model.visible_sequence(show_sequence()).map(|sequence| view! {
                                <p class="sequence">{sequence.to_string()}</p>
                            })}
                        </div>
                    }
                })}

                {model.alignment.clone().map(|alignment| view! {
                    <div class="alignment">
                        <p class="stat">{alignment.reads_line}</p>
                        <HistogramChart series=alignment.series/>
                    </div>
                })}
            </div>
        })
    }
}
