use thiserror::Error;

/// Errors raised by a [`Storage`](crate::Storage) backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage error: {0}")]
    Generic(String),
}

impl From<String> for StorageError {
    fn from(s: String) -> Self {
        StorageError::Generic(s)
    }
}

impl From<&str> for StorageError {
    fn from(s: &str) -> Self {
        StorageError::Generic(s.to_string())
    }
}
