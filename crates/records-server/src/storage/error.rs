//! Record store errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(i64),

    #[error("Record with id {0} already exists")]
    Conflict(i64),
}
