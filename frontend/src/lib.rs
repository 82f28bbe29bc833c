//! Plasmid Sequence Analysis - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a FASTA or BAM file to the
//! analysis service and displays the statistics it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadForm (picker, submit, error)                     │
//! │  ├── ResultsView (stats, reverse complement, histogram)     │
//! │  └── ActivityLog                                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state changes go through [`state::UploadState::apply`]; the
//! component tree only dispatches [`state::Action`]s.
//!
//! # Modules
//!
//! - [`types`] - Common types (AnalysisResult, LogEntry, AppError)
//! - [`state`] - Form state and reducer
//! - [`format`] - Result formatting helpers
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};
use wasm_bindgen::prelude::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod format;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    AnalysisResult,
    // Logs
    LogEntry, LogLevel, push_log,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

use state::{Action, Effect, UploadState};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🧬 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let state = create_rw_signal(UploadState::<File>::default());
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    let dispatch = Callback::new(move |action: Action<File>| run_action(state, set_logs, action));

    view! {
        <div class="container">
            <Hero/>
            <UploadForm state=state.read_only() dispatch=dispatch/>
            <ResultsView state=state.read_only() dispatch=dispatch/>
            <ActivityLog logs=logs set_logs=set_logs/>
        </div>

        <Footer/>
    }
}

/// Apply an action to the page state, then log and run what it asks for.
fn run_action(
    state: RwSignal<UploadState<File>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
    action: Action<File>,
) {
    let mut effect = None;
    let mut notice = None;

    state.update(|current| {
        let transition = std::mem::take(current).apply(action);
        *current = transition.state;
        effect = transition.effect;
        notice = transition.notice;
    });

    if let Some(notice) = notice {
        match notice.level {
            LogLevel::Error => log::error!("{}", notice.message),
            LogLevel::Warning => log::warn!("{}", notice.message),
            LogLevel::Debug => log::debug!("{}", notice.message),
            LogLevel::Info | LogLevel::Success => log::info!("{}", notice.message),
        }
        set_logs.update(|logs| push_log(logs, LogEntry::now(notice.level, notice.message)));
    }

    if let Some(Effect::Upload(request)) = effect {
        spawn_local(async move {
            let outcome = upload_sequence(&request).await;
            run_action(
                state,
                set_logs,
                Action::ResponseReceived {
                    generation: request.generation,
                    outcome,
                },
            );
        });
    }
}
