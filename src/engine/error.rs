use std::fmt;

use crate::models::ValidationError;

/// Everything that can stop a submission from rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    /// The form was submitted without a file
    NoFileSelected,
    /// The chosen file could not be read from disk
    FileRead(String),
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-success status
    Server { status: u16, message: String },
    /// The response body was not a valid analysis payload
    Decode(String),
    /// The payload decoded but its series are inconsistent
    Validation(ValidationError),
    /// The chart could not be constructed
    Chart(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::NoFileSelected => write!(f, "No file selected"),
            UploadError::FileRead(msg) => write!(f, "Could not read file: {}", msg),
            UploadError::Network(msg) => write!(f, "Request failed: {}", msg),
            UploadError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            UploadError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            UploadError::Validation(err) => write!(f, "Invalid analysis: {}", err),
            UploadError::Chart(msg) => write!(f, "Chart error: {}", msg),
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UploadError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for UploadError {
    fn from(err: ValidationError) -> Self {
        UploadError::Validation(err)
    }
}

impl UploadError {
    /// Errors the user caused locally, as opposed to failures of the round trip.
    pub fn is_user_input(&self) -> bool {
        matches!(self, UploadError::NoFileSelected | UploadError::FileRead(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn validation_errors_keep_their_source() {
        let err: UploadError = ValidationError::CountMismatch { count: 4, series: 3 }.into();
        assert_eq!(
            err.to_string(),
            "Invalid analysis: count is 4 but the series has 3 points"
        );
        assert!(err.source().is_some());
        assert!(!err.is_user_input());
    }

    #[test]
    fn server_errors_show_status_and_message() {
        let err = UploadError::Server {
            status: 400,
            message: "No file uploaded".into(),
        };
        assert_eq!(err.to_string(), "Server error (400): No file uploaded");
        assert!(err.source().is_none());
    }

    #[test]
    fn local_problems_are_user_input() {
        assert!(UploadError::NoFileSelected.is_user_input());
        assert!(UploadError::FileRead("denied".into()).is_user_input());
        assert!(!UploadError::Network("reset".into()).is_user_input());
    }
}
