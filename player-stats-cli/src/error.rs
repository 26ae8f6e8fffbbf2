use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The API could not be reached or its response could not be read
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error body; the message is shown verbatim
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Bad command-line input caught before contacting the API
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The user declined a confirmation prompt
    #[error("Cancelled")]
    Cancelled,
}

impl CliError {
    pub(crate) fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
