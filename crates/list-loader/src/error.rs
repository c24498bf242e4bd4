//! Load Errors
//!
//! Failure taxonomy shared by every request the loader issues.

use thiserror::Error;

/// Why a request to the board backend did not produce usable data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never completed (offline, DNS, CORS, aborted body read)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("server responded with status {status}")]
    Server { status: u16 },

    /// The payload did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Another request on the same list has not settled yet
    #[error("list is busy")]
    Busy,

    /// The resource has no endpoint for the requested action
    #[error("unsupported action: {0}")]
    Unsupported(&'static str),
}

impl LoadError {
    /// Only transport failures are worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LoadError::Network(_))
    }

    /// Short text suitable for a user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            LoadError::Server { status: 401 } => "You need to sign in to do that.".to_string(),
            LoadError::Server { status: 403 } => "You are not allowed to do that.".to_string(),
            LoadError::Server { status } => format!("The server could not complete the request ({}).", status),
            LoadError::MalformedResponse(_) => "The server sent an unexpected response.".to_string(),
            LoadError::Busy => "Still loading, try again in a moment.".to_string(),
            LoadError::Unsupported(_) => "This list does not support that action.".to_string(),
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
