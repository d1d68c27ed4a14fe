//! Typed configuration values
//!
//! One struct per primitive family. Key material is held in
//! [`Zeroizing`] buffers so that it is wiped when the configuration is
//! dropped.

use crate::traits::RandomGenerator;
use crate::types::{CipherId, Direction, HashId};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Keying material for a block cipher
#[derive(Clone, Default)]
pub struct CipherConfig {
    pub key: Option<Zeroizing<Vec<u8>>>,
    /// Block size in bytes; the cipher's default when absent
    pub block_size: Option<usize>,
}

impl CipherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: &[u8]) -> Self {
        self.key = Some(Zeroizing::new(key.to_vec()));
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }
}

impl core::fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CipherConfig")
            .field("key", &self.key.as_ref().map(|k| k.len()))
            .field("block_size", &self.block_size)
            .finish()
    }
}

/// Configuration of a mode of operation wrapping a block cipher
#[derive(Clone, Debug, Default)]
pub struct ModeConfig {
    pub cipher: CipherConfig,
    pub direction: Direction,
    /// Initialisation vector, one mode block long; all zeroes when absent
    pub iv: Option<Vec<u8>>,
    /// Mode block size; must equal the cipher block size when given
    pub mode_block_size: Option<usize>,
}

impl ModeConfig {
    pub fn new(cipher: CipherConfig) -> Self {
        Self {
            cipher,
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_iv(mut self, iv: &[u8]) -> Self {
        self.iv = Some(iv.to_vec());
        self
    }

    pub fn with_mode_block_size(mut self, size: usize) -> Self {
        self.mode_block_size = Some(size);
        self
    }
}

/// Keying of a message authentication code
///
/// HMAC reads `key`; TMMH16 reads `keystream` and `prefix`. `tag_len`
/// truncates the output of either.
#[derive(Default)]
pub struct MacConfig {
    pub key: Option<Zeroizing<Vec<u8>>>,
    pub keystream: Option<Box<dyn RandomGenerator + Send>>,
    pub tag_len: Option<usize>,
    pub prefix: Option<Vec<u8>>,
}

impl MacConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: &[u8]) -> Self {
        self.key = Some(Zeroizing::new(key.to_vec()));
        self
    }

    pub fn with_keystream(mut self, keystream: Box<dyn RandomGenerator + Send>) -> Self {
        self.keystream = Some(keystream);
        self
    }

    pub fn with_tag_len(mut self, tag_len: usize) -> Self {
        self.tag_len = Some(tag_len);
        self
    }

    pub fn with_prefix(mut self, prefix: &[u8]) -> Self {
        self.prefix = Some(prefix.to_vec());
        self
    }
}

/// Seeding of the hash-chain generator
#[derive(Clone, Default)]
pub struct MdConfig {
    /// Underlying digest, `sha-160` when absent
    pub hash: Option<HashId>,
    pub seed: Option<Zeroizing<Vec<u8>>>,
}

impl MdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash(mut self, hash: HashId) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn with_seed(mut self, seed: &[u8]) -> Self {
        self.seed = Some(Zeroizing::new(seed.to_vec()));
        self
    }
}

/// Parameters of the integer counter mode generator
///
/// The counter starts at `segment_index * 256^block_index_len + offset`.
/// At least one of the two index lengths must be given; the other one
/// defaults to half the cipher block minus the given one.
#[derive(Clone, Default)]
pub struct IcmConfig {
    /// Underlying cipher, `aes` when absent
    pub cipher: Option<CipherId>,
    pub block_size: Option<usize>,
    pub key: Option<Zeroizing<Vec<u8>>>,
    /// Big-endian offset, one cipher block long
    pub offset: Option<Vec<u8>>,
    pub segment_index: u64,
    pub block_index_len: Option<usize>,
    pub segment_index_len: Option<usize>,
}

impl IcmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cipher(mut self, cipher: CipherId) -> Self {
        self.cipher = Some(cipher);
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    pub fn with_key(mut self, key: &[u8]) -> Self {
        self.key = Some(Zeroizing::new(key.to_vec()));
        self
    }

    pub fn with_offset(mut self, offset: &[u8]) -> Self {
        self.offset = Some(offset.to_vec());
        self
    }

    pub fn with_segment_index(mut self, index: u64) -> Self {
        self.segment_index = index;
        self
    }

    pub fn with_block_index_len(mut self, len: usize) -> Self {
        self.block_index_len = Some(len);
        self
    }

    pub fn with_segment_index_len(mut self, len: usize) -> Self {
        self.segment_index_len = Some(len);
        self
    }
}

/// Per-generator configuration
#[derive(Clone)]
pub enum PrngConfig {
    Md(MdConfig),
    Icm(IcmConfig),
    /// For generators whose block source needs no parameters
    Empty,
}

/// Key-pair generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPairConfig {
    /// Modulus length in bits; 512 for DSS and 1024 for RSA when absent
    pub modulus_bits: Option<usize>,
    /// DSS only: use the precomputed domain parameters; true when absent
    pub use_defaults: Option<bool>,
}

impl KeyPairConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modulus_bits(mut self, bits: usize) -> Self {
        self.modulus_bits = Some(bits);
        self
    }

    pub fn with_defaults(mut self, use_defaults: bool) -> Self {
        self.use_defaults = Some(use_defaults);
        self
    }
}
