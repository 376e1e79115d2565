use apiscope_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Manifest error in {path}: {message}")]
    Manifest { path: String, message: String },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ApiscopeError>;
