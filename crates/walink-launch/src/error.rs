use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no handler found: {0}")]
    HandlerNotFound(String),
    #[error("launch unavailable: {0}")]
    Unavailable(String),
    #[error("launch command failed: {0}")]
    Command(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
