use thiserror::Error;

/// Failure of a call to one of the remote collaborators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network failure, CORS rejection, request could not be built
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body did not have the expected shape
    #[error("unexpected response: {0}")]
    Malformed(String),

    /// Input rejected before or after the call (e.g. address outside the country)
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            body: body.into(),
        }
    }

    /// Short text for inline messages and alerts
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Network error, please try again.".to_string(),
            ApiError::Status { status, .. } if *status >= 500 => {
                "The server is unavailable, please try again.".to_string()
            }
            ApiError::Status { status, .. } => format!("Request was refused ({}).", status),
            ApiError::Malformed(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Validation(msg) => msg.clone(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Malformed(e.to_string())
    }
}
