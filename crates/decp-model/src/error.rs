use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecpError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown {kind} label: {value}")]
    UnknownLabel { kind: &'static str, value: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, DecpError>;
