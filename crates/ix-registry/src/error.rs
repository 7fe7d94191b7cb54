use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("index {index} is already registered")]
    DuplicateIndex { index: u32 },

    #[error("no entry registered at index {index}")]
    NotFound { index: u32 },

    #[error("handle is not registered in this table")]
    Unregistered,
}

pub type RegistryResult<T> = Result<T, RegistryError>;
