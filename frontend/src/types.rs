//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Analysis service response
//! - **Log Types** - In-page activity log
//! - **Error Types** - Frontend error handling

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::MAX_LOG_ENTRIES;

// =============================================================================
// API Response Types
// =============================================================================

/// Statistics returned by the analysis service.
///
/// Every field is optional: FASTA uploads only carry the sequence fields,
/// BAM uploads add `reads_count` and `histogram_data`. A field that is
/// missing from the response stays `None` and is never rendered.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// Total sequence length in bases
    #[serde(default)]
    pub sequence_length: Option<u64>,
    /// G/C percentage (0-100)
    #[serde(default)]
    pub gc_content: Option<f64>,
    /// Reverse complement of the sequence
    #[serde(default)]
    pub reverse_complement: Option<String>,
    /// Number of reads (BAM only)
    #[serde(default)]
    pub reads_count: Option<u64>,
    /// Read length bucket -> count, in the order received (BAM only)
    #[serde(default)]
    pub histogram_data: Option<Map<String, Value>>,
}

impl AnalysisResult {
    /// Read count and histogram, only when both were returned.
    pub fn alignment_data(&self) -> Option<(u64, &Map<String, Value>)> {
        match (self.reads_count, self.histogram_data.as_ref()) {
            (Some(count), Some(histogram)) => Some((count, histogram)),
            _ => None,
        }
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
    /// Debug message (verbose)
    Debug,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
            LogLevel::Debug => "log-debug",
        }
    }
}

/// A single activity log entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Position in the log, assigned by [`push_log`]
    pub id: u64,
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Append an entry, evicting the oldest ones beyond [`MAX_LOG_ENTRIES`].
///
/// Ids keep increasing across evictions so they can key rendered rows.
pub fn push_log(logs: &mut Vec<LogEntry>, mut entry: LogEntry) {
    entry.id = logs.last().map_or(0, |last| last.id + 1);
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let overflow = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..overflow);
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Submit pressed without a file.
    #[error("Please select a file to analyze.")]
    NoFileSelected,

    /// Building the multipart request failed.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("Server error ({status} {status_text}){}", detail_suffix(.detail))]
    Http {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    /// The success body was not a valid analysis result.
    #[error("Failed to parse response: {0}")]
    MalformedJson(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
