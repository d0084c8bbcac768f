use thiserror::Error;

/// vCard construction errors
#[derive(Error, Debug)]
pub enum VcardError {
    #[error("Contact name is empty, cannot build a structured name")]
    EmptyName,
}

pub type VcardResult<T> = std::result::Result<T, VcardError>;
