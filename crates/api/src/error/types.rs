//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Missing or unusable key material
    #[error("invalid key for {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Operation not allowed in the current lifecycle state
    #[error("invalid state in {context}: {message}")]
    InvalidState {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("invalid parameter for {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Malformed padding or encoded data
    #[error("corrupt data in {context}: {message}")]
    CorruptData {
        context: &'static str,
        message: String,
    },

    /// A generator has produced every block it is allowed to produce
    #[error("limit reached in {context}")]
    LimitReached { context: &'static str },

    /// Not implemented error
    #[error("not implemented: {feature}")]
    NotImplemented { feature: &'static str },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidKey` error
    pub fn key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidState` error
    pub fn state(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidState {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `CorruptData` error
    pub fn corrupt(context: &'static str, message: impl Into<String>) -> Self {
        Self::CorruptData {
            context,
            message: message.into(),
        }
    }

    /// The static context the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidState { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::CorruptData { context, .. }
            | Self::LimitReached { context }
            | Self::Other { context, .. } => *context,
            Self::NotImplemented { feature } => *feature,
        }
    }

    /// Replace the context of an existing error, keeping its kind and message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidState { message, .. } => Self::InvalidState { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::CorruptData { message, .. } => Self::CorruptData { context, message },
            Self::LimitReached { .. } => Self::LimitReached { context },
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}
