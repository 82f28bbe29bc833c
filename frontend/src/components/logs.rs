//! Activity log panel.
//!
//! Shows what the form did: selections, uploads, responses and
//! discarded stale responses. Scrolls to the newest entry.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::LogEntry;

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    if let Err(e) = gloo_utils::window().request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

#[component]
pub fn ActivityLog(
    /// Signal for logs data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<leptos::html::Div>();

    create_effect(move |_| {
        let _ = logs.get();

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <Show
            when=move || !logs.get().is_empty()
            fallback=|| view! { }
        >
            <div class="logs-panel">
                <div class="logs-header">
                    <span class="logs-title">"📋 Activity"</span>
                    <button
                        type="button"
                        class="logs-clear"
                        on:click=move |_| set_logs.set(vec![])
                    >
                        "Clear"
                    </button>
                </div>
                <div class="logs-content" node_ref=logs_container>
                    <For
                        each=move || logs.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
