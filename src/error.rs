// ABOUTME: Error types for the job board client
// ABOUTME: Separates transport, server rejection, decoding and local validation failures

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Connection(String),
    Rejected {
        status: u16,
        message: Option<String>,
    },
    Decode(String),
    Validation(String),
}

impl BoardError {
    /// Message meant for the person using the board: the server's own `error`
    /// text when it sent one, the validation text for local failures.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            BoardError::Rejected {
                message: Some(msg), ..
            } => Some(msg),
            BoardError::Validation(msg) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::Connection(msg) => write!(f, "Connection error: {}", msg),
            BoardError::Rejected {
                status,
                message: Some(msg),
            } => write!(f, "Request rejected with status {}: {}", status, msg),
            BoardError::Rejected {
                status,
                message: None,
            } => write!(f, "Request rejected with status {}", status),
            BoardError::Decode(msg) => write!(f, "Decode error: {}", msg),
            BoardError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BoardError::Decode(err.to_string())
        } else {
            BoardError::Connection(err.to_string())
        }
    }
}
