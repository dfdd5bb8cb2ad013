//! Server-level errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("session limit of {max} reached")]
    SessionLimit { max: usize },
}

pub type Result<T> = std::result::Result<T, ServerError>;
