//! Error handling for s24.

use std::io;

use thiserror::Error;

/// Main error type for s24 operations.
#[derive(Error, Debug)]
pub enum S24Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Catalog data error: {0}")]
    CatalogData(String),

    #[error("Skill not found: {0}")]
    SkillNotFound(String),

    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for s24 operations.
pub type Result<T> = std::result::Result<T, S24Error>;
