//! Per-family primitive contracts

pub mod cipher;
pub mod codec;
pub mod digest;
pub mod pad;
pub mod prng;
pub mod signature;

pub use cipher::{BlockCipher, CipherMode};
pub use codec::{KeyCodec, SignatureCodec};
pub use digest::{MacFunction, MessageDigest};
pub use pad::PaddingScheme;
pub use prng::RandomGenerator;
pub use signature::{KeyPairGenerator, SignatureScheme};
