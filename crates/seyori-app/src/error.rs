use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    StoreError(#[from] seyori_store::error::StoreError),

    #[error(transparent)]
    VcardError(#[from] seyori_vcard::error::VcardError),

    #[error(transparent)]
    CoreError(#[from] seyori_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
