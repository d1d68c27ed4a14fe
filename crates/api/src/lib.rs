//! Public API traits and types for the gcrypto library
//!
//! This crate provides the public API surface shared by every gcrypto crate:
//! the error type, the algorithm ids and their name registry, the typed
//! configuration values, and the per-family primitive contracts.

pub mod config;
pub mod error;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use config::{
    CipherConfig, IcmConfig, KeyPairConfig, MacConfig, MdConfig, ModeConfig, PrngConfig,
};

// Re-export all traits from the traits module
pub use traits::{
    BlockCipher, CipherMode, KeyCodec, KeyPairGenerator, MacFunction, MessageDigest,
    PaddingScheme, RandomGenerator, SignatureCodec, SignatureScheme,
};
