//! Constant values for gcrypto cryptographic operations
//!
//! Sizes, default domain parameters and encoding tags shared by the
//! algorithm and signature crates.

pub mod codec;
pub mod traditional;
pub mod utils;
