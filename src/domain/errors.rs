use std::fmt;

// Errors returned by the game API port. Every variant is recoverable: the
// caller decides whether to surface, log or ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // The request never produced a response (connect, timeout, body read).
    Transport(String),
    // Non-success HTTP status; the body is kept verbatim as the detail.
    Status { status: u16, body: String },
    // The body could not be interpreted as the expected payload.
    Protocol(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "api transport error: {err}"),
            ApiError::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "api upstream error {status}")
                } else {
                    write!(f, "api upstream error {status}: {body}")
                }
            }
            ApiError::Protocol(err) => write!(f, "api response decode error: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}
