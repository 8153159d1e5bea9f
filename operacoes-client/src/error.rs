use thiserror::Error;

/// Failures of a single call to the operations service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The service rejected the request and explained why.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Non-success status without a `detail` message.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Text typed by a user that is not a pair of numbers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Por favor, insira números válidos!")]
    InvalidNumbers,
}
