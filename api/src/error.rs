use thiserror::Error;

/// Everything that can go wrong talking to the data service.
///
/// Display strings are user-facing: the listing shows them as its error
/// message and the submission form shows them in its failure notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No service address configured; nothing was sent.
    #[error("API URL is missing. Set OPENATLAS_API_URL and rebuild.")]
    MissingBaseUrl,

    /// The request could not complete (DNS, connection, CORS, ...).
    #[error("{0}")]
    Transport(String),

    /// Non-success status without a usable message in the body.
    #[error("Failed with {status}")]
    Status { status: u16 },

    /// The service explained the failure itself.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// A success body that could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ApiError::MissingBaseUrl)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
