//! Application configuration.
//!
//! Centralized configuration for the analysis frontend.
//! These are hardcoded; the backend address must match the
//! analysis service deployment.

/// Analysis service base URL.
///
/// Uploads go to `{BACKEND_URL}/upload/{extension}/`.
pub const BACKEND_URL: &str = "http://0.0.0.0:5000";

/// Application name, used for the page title.
pub const APP_NAME: &str = "Plasmid Sequence Analysis Tool";

/// Extension filter hint for the file picker (not enforced).
pub const ACCEPTED_EXTENSIONS: &str = ".fasta, .bam";

/// Multipart field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Width of the space-separated chunks used to display long sequences.
pub const SEQUENCE_CHUNK_SIZE: usize = 50;

/// Maximum activity log entries to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;
