use std::fmt;

use reqwest::StatusCode;

pub type ApiResult<T> = Result<T, ApiError>;

/// Why a round trip to the player service produced no usable value.
#[derive(Debug)]
pub enum ApiError {
    /// The request never got a response (unreachable host, timeout, ...).
    Transport(reqwest::Error),
    /// The service answered with a non-success HTTP status.
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    /// The service answered 2xx but flagged the envelope as unsuccessful.
    Rejected { message: Option<String> },
    /// The body was not the JSON we expected.
    Decode(serde_json::Error),
}

impl ApiError {
    /// A successful envelope that lacks the member we came for.
    pub fn missing(member: &str) -> ApiError {
        ApiError::Decode(<serde_json::Error as serde::de::Error>::custom(format!(
            "response envelope has no `{}`",
            member
        )))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport failure: {}", err),
            ApiError::Status { status, message } => match message {
                Some(message) => write!(f, "service returned {}: {}", status, message),
                None => write!(f, "service returned {}", status),
            },
            ApiError::Rejected { message } => match message {
                Some(message) => write!(f, "service rejected the request: {}", message),
                None => write!(f, "service rejected the request"),
            },
            ApiError::Decode(err) => write!(f, "malformed response body: {}", err),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            ApiError::Decode(err) => Some(err),
            ApiError::Status { .. } | ApiError::Rejected { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}
