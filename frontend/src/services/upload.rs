//! HTTP service for uploading sequence files to the analysis backend.
//!
//! The backend exposes one route per format:
//!
//! | Method | Path             | Accepts                     |
//! |--------|------------------|-----------------------------|
//! | POST   | `/upload/fasta/` | `.fasta`, `.fas`, `.fa`     |
//! | POST   | `/upload/bam/`   | `.bam`                      |

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::state::AnalysisRequest;
use crate::{AnalysisResult, AppError, AppResult, UPLOAD_FIELD};

/// Substring after the last `.` of a file name, or the whole name.
pub fn file_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

/// Backend route segment for an extension.
///
/// Lower-cases the extension and folds the FASTA aliases onto `fasta`.
/// Anything else is passed through and left for the backend to reject.
pub fn route_extension(extension: &str) -> String {
    let lower = extension.to_ascii_lowercase();
    match lower.as_str() {
        "fa" | "fas" => "fasta".to_string(),
        _ => lower,
    }
}

/// Upload endpoint for a route segment.
pub fn upload_url(base_url: &str, route: &str) -> String {
    format!("{}/upload/{}/", base_url.trim_end_matches('/'), route)
}

/// Extract the human readable message from an error body.
///
/// Handles `{"detail": "..."}` and `{"error": "..."}`.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "error"]
        .iter()
        .find_map(|key| value.get(*key)?.as_str())
        .map(str::to_string)
}

/// Upload a file to the analysis service and parse the statistics.
pub async fn upload_sequence(request: &AnalysisRequest<File>) -> AppResult<AnalysisResult> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, &request.payload, &request.file_name)
        .map_err(|e| AppError::Request(format!("Failed to append file: {:?}", e)))?;

    let http_request = Request::post(&request.url)
        .body(form_data)
        .map_err(|e| AppError::Request(e.to_string()))?;

    let response = http_request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let detail = response.text().await.ok().as_deref().and_then(error_detail);
        return Err(AppError::Http {
            status,
            status_text,
            detail,
        });
    }

    response
        .json::<AnalysisResult>()
        .await
        .map_err(|e| AppError::MalformedJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("sample.fasta"), "fasta");
        assert_eq!(file_extension("reads.sorted.bam"), "bam");
        assert_eq!(file_extension("readme"), "readme");
        assert_eq!(file_extension("Sample.FASTA"), "FASTA");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_route_extension() {
        assert_eq!(route_extension("FASTA"), "fasta");
        assert_eq!(route_extension("fa"), "fasta");
        assert_eq!(route_extension("Fas"), "fasta");
        assert_eq!(route_extension("BAM"), "bam");
        assert_eq!(route_extension("txt"), "txt");
    }

    #[test]
    fn test_upload_url() {
        assert_eq!(
            upload_url("http://0.0.0.0:5000", "fasta"),
            "http://0.0.0.0:5000/upload/fasta/"
        );
        assert_eq!(
            upload_url("http://h:5000/", "bam"),
            "http://h:5000/upload/bam/"
        );
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "Invalid BAM file"}"#).as_deref(),
            Some("Invalid BAM file")
        );
        assert_eq!(
            error_detail(r#"{"error": "division by zero"}"#).as_deref(),
            Some("division by zero")
        );
        assert_eq!(error_detail(r#"{"detail": [1, 2]}"#), None);
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(""), None);
    }
}
