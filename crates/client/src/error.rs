// Client error type

use siteline_core::{ApiError, ErrorKind, UploadError};
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// A request failed; the message is ready to show to a user
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Invalid multipart field '{field}': {source}")]
    Form {
        field: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl ClientError {
    pub fn config(msg: impl Into<String>) -> Self {
        ClientError::Config(msg.into())
    }

    /// The translated API error, if this is one.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.api().map(|err| err.kind)
    }
}
