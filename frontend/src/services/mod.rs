//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Sequence file upload to the analysis backend
//!
//! Only [`upload::upload_sequence`] touches the network; the URL and
//! extension helpers are pure.

pub mod upload;

pub use upload::*;
