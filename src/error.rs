#[derive(Debug)]
pub enum SubmitError {
    /// A required environment variable is missing or empty after trimming.
    Config(String),
    /// The payload handed to the canonical serializer is malformed.
    InvalidPayload(String),
    /// The signing secret is absent or empty.
    MissingSecret,
    /// The request could not be completed (connection failure, timeout).
    Transport(reqwest::Error),
    /// The endpoint answered with a non-success status.
    Rejected { status: u16, body: String },
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SubmitError::InvalidPayload(msg) => write!(f, "Invalid payload: {msg}"),
            SubmitError::MissingSecret => write!(f, "Signing secret is missing or empty"),
            SubmitError::Transport(err) => write!(f, "Transport error: {err}"),
            SubmitError::Rejected { status, body } => {
                write!(f, "Endpoint rejected submission (status {status}): {body}")
            }
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err)
    }
}
