use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComedorError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Directory query failed: {0}")]
    Directory(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ComedorResult<T> = Result<T, ComedorError>;
