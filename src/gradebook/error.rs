use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid performance: {0}")]
    InvalidPerformance(String),
}

pub type Result<T> = std::result::Result<T, GradebookError>;
