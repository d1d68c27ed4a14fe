//! # gcrypto
//!
//! A framework of named, self-testing cryptographic primitives.
//!
//! ## Features
//!
//! - `algorithms` (default): block ciphers and modes, digests, MACs,
//!   padding schemes, pseudo-random generators and multi-precision integers
//! - `sign` (default): DSS and RSA-PSS with their key-pair generators and
//!   raw codecs
//! - `serde`: serde support for the plain value types of the API
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`gcrypto-api`]: error type, algorithm ids, name registry, configuration
//!   values and the per-family traits
//! - [`gcrypto-internal`]: constant-time helpers
//! - [`gcrypto-params`]: algorithm constants and default domain parameters
//! - [`gcrypto-algorithms`]: symmetric primitives and their factories
//! - [`gcrypto-sign`]: signature schemes and key-pair generators
//!
//! Every primitive is obtained by name from its family's factory. The
//! factory runs the instance's self-test before handing it out and panics
//! if that test fails:
//!
//! ```no_run
//! use gcrypto::prelude::*;
//!
//! let mut sha = HashFactory::get_instance("sha-1").expect("registered");
//! sha.update(b"abc");
//! assert_eq!(sha.digest().len(), 20);
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use gcrypto_api as api;
pub use gcrypto_internal as internal;
pub use gcrypto_params as params;

pub use zeroize;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use gcrypto_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use gcrypto_sign as sign;

#[cfg(feature = "sign")]
pub use rand;

/// Common imports for gcrypto users
pub mod prelude {
    pub use crate::api::{Error, Result};

    // Family contracts
    pub use crate::api::{
        BlockCipher, CipherMode, KeyCodec, KeyPairGenerator, MacFunction, MessageDigest,
        PaddingScheme, RandomGenerator, SignatureCodec, SignatureScheme,
    };

    // Configuration values
    pub use crate::api::{
        CipherConfig, Direction, IcmConfig, KeyFormat, KeyPairConfig, MacConfig, MdConfig,
        ModeConfig, PrngConfig,
    };

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        CipherFactory, HashFactory, MacFactory, ModeFactory, PadFactory, PrngFactory,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        KeyPair, KeyPairGeneratorFactory, PrivateKey, PublicKey, Signature, SignatureFactory,
        SignatureValue,
    };
}
