use thiserror::Error;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact book is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] seyori_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
