use thiserror::Error;

pub type Result<T> = std::result::Result<T, VfsError>;

#[derive(Error, Debug)]
pub enum VfsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid target URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid stream mode: {0}")]
    Mode(String),
    #[error("Scheme error: {0}")]
    Scheme(String),
    #[error("Operation not permitted: {0}")]
    NotPermitted(&'static str),
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VfsError {
    /// Whether this is a plain permission refusal from a handler,
    /// as opposed to a runtime failure.
    pub fn is_refusal(&self) -> bool {
        matches!(self, VfsError::NotPermitted(_))
    }
}
