use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid move {0:?}, expected one of R, P or S")]
    InvalidMove(String),

    #[error("invalid pattern {0:?}")]
    InvalidPattern(String),

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
