use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("feed parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
