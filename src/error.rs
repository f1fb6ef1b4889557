//! Error types for image queries and argument handling.

use thiserror::Error;

/// Errors that can occur when interpreting arguments or querying images.
#[derive(Debug, Error)]
pub enum ImageError {
    /// No arguments were given at all.
    #[error("no arguments given")]
    NoArguments,

    /// A value-bearing flag is not followed by any provider token.
    #[error("dangling argument: {0}\nProgram arguments need to be BEFORE the CSP.")]
    DanglingArgument(String),

    /// Unrecognized flag.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unrecognized non-flag token.
    #[error("invalid CSP: {0}")]
    InvalidProvider(String),

    /// A value-bearing flag was the last argument.
    #[error("missing value for {0}")]
    MissingValue(String),

    /// The provider returned no usable images.
    #[error("no images found")]
    NoImages,

    /// Images were returned but the filter removed all of them.
    #[error("no images found (too restrictive filter?)")]
    FilterTooRestrictive,

    /// Operation not supported for this provider.
    #[error("operation not supported for this provider")]
    NotSupported,

    /// HTTP error with status code.
    #[error("http {0}")]
    Http(u16),

    /// JSON deserialization error.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImageError {
    /// Whether this error stems from the command line rather than a query.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ImageError::NoArguments
                | ImageError::DanglingArgument(_)
                | ImageError::InvalidParameter(_)
                | ImageError::InvalidProvider(_)
                | ImageError::MissingValue(_)
        )
    }
}
