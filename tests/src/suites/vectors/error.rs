//! Structured error type for the vector engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("cannot read suite: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse suite: {0}")]
    Json(#[from] serde_json::Error),

    #[error("crypto operation failed: {0}")]
    Crypto(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("no {family} handler or instance for {name}")]
    Unknown { family: String, name: String },

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<gcrypto_api::Error> for EngineError {
    fn from(e: gcrypto_api::Error) -> Self {
        EngineError::Crypto(e.to_string())
    }
}
