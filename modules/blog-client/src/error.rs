use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlogError>;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for BlogError {
    fn from(err: reqwest::Error) -> Self {
        BlogError::Network(err.to_string())
    }
}
