use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("non-finite result cannot be encoded as JSON: {0}")]
    NonFiniteResult(f64),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
