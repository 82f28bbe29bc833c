//! Upload form state and its reducer.
//!
//! Every user action and every service response goes through
//! [`UploadState::apply`], which consumes the current snapshot and
//! returns the next one together with the side effect to run (if any)
//! and a notice for the activity log.
//!
//! ```text
//!   Idle ──Submit──▶ Submitting ──response──▶ Succeeded / Failed
//!    ▲                   │ Submit (new generation)
//!    └───────────────────┘
//! ```
//!
//! The state is generic over the file payload so it can be driven with
//! plain byte buffers in tests and with `web_sys::File` in the browser.

use std::rc::Rc;

use crate::format::HistogramSeries;
use crate::services::upload::{file_extension, route_extension, upload_url};
use crate::{AnalysisResult, AppError, AppResult, LogLevel, BACKEND_URL};

/// The file chosen in the picker.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    /// File name as reported by the browser
    pub name: String,
    /// File content handle
    pub payload: F,
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Snapshot of the upload form and results view.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadState<F> {
    pub file: Option<SelectedFile<F>>,
    /// Shared so snapshots and views can hold it without copying
    pub result: Option<Rc<AnalysisResult>>,
    pub error: Option<String>,
    /// Whether the reverse complement text is shown
    pub show_sequence: bool,
    pub phase: Phase,
    /// Generation of the latest issued request
    pub generation: u64,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            file: None,
            result: None,
            error: None,
            show_sequence: false,
            phase: Phase::Idle,
            generation: 0,
        }
    }
}

/// Inputs to the reducer.
#[derive(Debug)]
pub enum Action<F> {
    /// Picker changed; `None` when the selection was cleared.
    SelectFile(Option<SelectedFile<F>>),
    /// Form submitted.
    Submit,
    /// Show/hide the reverse complement.
    ToggleSequence,
    /// A request finished.
    ResponseReceived {
        generation: u64,
        outcome: AppResult<AnalysisResult>,
    },
}

/// One upload to the analysis service.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisRequest<F> {
    pub generation: u64,
    pub file_name: String,
    pub url: String,
    pub payload: F,
}

/// Side effects requested by the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect<F> {
    Upload(AnalysisRequest<F>),
}

/// Activity log message produced by a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: LogLevel,
    pub message: String,
}

impl Notice {
    fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Result of applying an action.
#[derive(Debug)]
pub struct Transition<F> {
    pub state: UploadState<F>,
    pub effect: Option<Effect<F>>,
    pub notice: Option<Notice>,
}

impl<F> Transition<F> {
    fn quiet(state: UploadState<F>) -> Self {
        Self {
            state,
            effect: None,
            notice: None,
        }
    }

    fn with_notice(state: UploadState<F>, notice: Notice) -> Self {
        Self {
            state,
            effect: None,
            notice: Some(notice),
        }
    }
}

impl<F: Clone> UploadState<F> {
    /// Apply an action, producing the next snapshot.
    pub fn apply(self, action: Action<F>) -> Transition<F> {
        match action {
            Action::SelectFile(file) => self.select_file(file),
            Action::Submit => self.submit(),
            Action::ToggleSequence => Transition::quiet(Self {
                show_sequence: !self.show_sequence,
                ..self
            }),
            Action::ResponseReceived {
                generation,
                outcome,
            } => self.receive(generation, outcome),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    fn select_file(self, file: Option<SelectedFile<F>>) -> Transition<F> {
        let notice = file
            .as_ref()
            .map(|f| Notice::new(LogLevel::Info, format!("Selected {}", f.name)));
        let state = Self { file, ..self };

        match notice {
            Some(notice) => Transition::with_notice(state, notice),
            None => Transition::quiet(state),
        }
    }

    fn submit(self) -> Transition<F> {
        let Some(file) = self.file.clone() else {
            let message = AppError::NoFileSelected.to_string();
            let state = Self {
                error: Some(message.clone()),
                ..self
            };
            return Transition::with_notice(state, Notice::new(LogLevel::Warning, message));
        };

        let url = upload_url(BACKEND_URL, &route_extension(file_extension(&file.name)));
        let generation = self.generation + 1;

        let notice = Notice::new(
            LogLevel::Info,
            format!("Uploading {} to {} (request #{})", file.name, url, generation),
        );
        let request = AnalysisRequest {
            generation,
            file_name: file.name,
            url,
            payload: file.payload,
        };
        let state = Self {
            result: None,
            error: None,
            phase: Phase::Submitting,
            generation,
            ..self
        };

        Transition {
            state,
            effect: Some(Effect::Upload(request)),
            notice: Some(notice),
        }
    }

    fn receive(self, generation: u64, outcome: AppResult<AnalysisResult>) -> Transition<F> {
        if generation != self.generation {
            let notice = Notice::new(
                LogLevel::Debug,
                format!(
                    "Discarded stale response #{} (latest is #{})",
                    generation, self.generation
                ),
            );
            return Transition::with_notice(self, notice);
        }

        match outcome {
            Ok(result) => {
                let skipped = result
                    .histogram_data
                    .as_ref()
                    .map(HistogramSeries::invalid_buckets)
                    .unwrap_or_default();
                let notice = if skipped.is_empty() {
                    Notice::new(LogLevel::Success, format!("Analysis #{} complete", generation))
                } else {
                    Notice::new(
                        LogLevel::Warning,
                        format!(
                            "Analysis #{} complete; histogram buckets without an integer count were not charted: {}",
                            generation,
                            skipped.join(", ")
                        ),
                    )
                };
                let state = Self {
                    result: Some(Rc::new(result)),
                    phase: Phase::Succeeded,
                    ..self
                };
                Transition::with_notice(state, notice)
            }
            Err(err) => {
                let message = format!("Analysis failed: {}", err);
                let state = Self {
                    error: Some(message.clone()),
                    phase: Phase::Failed,
                    ..self
                };
                Transition::with_notice(state, Notice::new(LogLevel::Error, message))
            }
        }
    }
}
