use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
