use serde_json::Number;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("book name is required")]
    MissingName,
    #[error("readPage ({read_page}) is greater than pageCount ({page_count})")]
    ReadPageExceedsPageCount {
        read_page: Number,
        page_count: Number,
    },
    #[error("book not found: {0}")]
    BookNotFound(String),
    #[error("internal store error: {0}")]
    Internal(String),
}

/// Coarse error classes, one per client-visible status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingName | Self::ReadPageExceedsPageCount { .. } => ErrorKind::Validation,
            Self::BookNotFound(_) => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
