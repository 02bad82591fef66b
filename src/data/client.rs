use async_trait::async_trait;
use serde::Deserialize;

use crate::engine::UploadError;
use crate::models::AnalysisResult;

/// Sends one CSV upload to the analysis service.
///
/// `?Send` because the browser implementation holds JS values across the await.
#[async_trait(?Send)]
pub trait AnalysisClient {
    /// The file handle this client knows how to upload.
    type Upload;

    async fn analyze(&self, upload: Self::Upload) -> Result<AnalysisResult, UploadError>;
}

/// Error body the service returns alongside 4xx statuses, e.g. `{"error": "No file uploaded"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Turns a raw HTTP status and body into an analysis or a typed failure.
pub fn decode_response(status: u16, body: &str) -> Result<AnalysisResult, UploadError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| UploadError::Decode(e.to_string()));
    }

    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => format!("HTTP {}", status),
    };
    Err(UploadError::Server { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes() {
        let body = r#"{"trend":"SIDEWAYS","slope":0.001,"highest":10.5,"lowest":9.5,"average":10,
                       "count":2,"dates":["01-01-2026","02-01-2026"],"prices":[9.5,10.5],"changes":[0,1]}"#;
        let result = decode_response(200, body).unwrap();
        assert_eq!(result.trend, "SIDEWAYS");
        assert_eq!(result.count, 2);
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        assert!(matches!(
            decode_response(200, "<html>oops</html>"),
            Err(UploadError::Decode(_))
        ));
    }

    #[test]
    fn json_error_body_becomes_server_error() {
        assert_eq!(
            decode_response(400, r#"{"error": "No file uploaded"}"#),
            Err(UploadError::Server {
                status: 400,
                message: "No file uploaded".into()
            })
        );
    }

    #[test]
    fn plain_and_empty_error_bodies_are_reported() {
        assert_eq!(
            decode_response(502, " Bad Gateway \n"),
            Err(UploadError::Server {
                status: 502,
                message: "Bad Gateway".into()
            })
        );
        assert_eq!(
            decode_response(500, ""),
            Err(UploadError::Server {
                status: 500,
                message: "HTTP 500".into()
            })
        );
    }
}
