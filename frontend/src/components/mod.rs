//! UI Components for the sequence analysis application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - File picker and submit button
//! - [`ResultsView`] - Returned statistics, shown per field
//! - [`HistogramChart`] - Read length bar chart (BAM results)
//! - [`ActivityLog`] - Submission and response log

mod hero;
mod upload;
mod results;
mod histogram;
mod footer;
mod logs;

pub use hero::*;
pub use upload::*;
pub use results::*;
pub use histogram::*;
pub use footer::*;
pub use logs::*;
