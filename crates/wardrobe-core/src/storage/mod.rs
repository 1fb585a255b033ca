use crate::error::StorageError;

pub mod config;
pub mod openings;

type Result<T> = std::result::Result<T, StorageError>;
