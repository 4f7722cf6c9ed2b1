use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn an input stream into a document tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read document stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("document is empty")]
    Empty,
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Failure of a whole preset extraction. Missing fields inside a matched
/// container never end up here.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("could not open preset '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Everything that can go wrong while serving `POST /upload`.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no 'file' field in the upload")]
    MissingFile,
    #[error("upload exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error("could not store upload: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Failed to parse! Error: {0}")]
    Preset(#[from] PresetError),
    #[error("extraction worker was cancelled")]
    Blocking,
}

impl ResponseError for UploadError {
    fn status_code(&self) -> StatusCode {
        match self {
            UploadError::MissingFile | UploadError::Multipart(_) => StatusCode::BAD_REQUEST,
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Storage(_) | UploadError::Preset(_) | UploadError::Blocking => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(format!("{} - {}", status.as_u16(), self))
    }
}
