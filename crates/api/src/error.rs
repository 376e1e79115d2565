#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No presenter for {resource} in namespace {namespace}")]
    NotFound { namespace: String, resource: String },
    #[error("Formatter not implemented: {0}")]
    Unimplemented(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn not_found(namespace: impl Into<String>, resource: impl Into<String>) -> Self {
        ApiError::NotFound {
            namespace: namespace.into(),
            resource: resource.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
