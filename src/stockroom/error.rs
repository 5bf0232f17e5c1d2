use crate::model::ProductId;
use std::fmt;
use thiserror::Error;

/// Which direction of storage I/O failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    Read,
    Write,
}

impl fmt::Display for StorageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageAction::Read => write!(f, "read"),
            StorageAction::Write => write!(f, "write"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StockError {
    #[error("A product with id {0} already exists")]
    DuplicateId(ProductId),

    #[error("No product with id {0}")]
    NotFound(ProductId),

    #[error("Could not {action} {location}: {source}")]
    StorageUnavailable {
        action: StorageAction,
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl StockError {
    pub fn storage(
        action: StorageAction,
        location: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        StockError::StorageUnavailable {
            action,
            location: location.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
