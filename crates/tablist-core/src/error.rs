//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab list is empty")]
    EmptyTabs,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
