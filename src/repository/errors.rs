use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not signed in")]
    Unauthenticated,

    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response; `message` comes from the body when it carries one.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Envelope with a non-zero `code`.
    #[error("{message}")]
    Business { code: i64, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}
