//! Algorithm identifiers and plain value types shared across the library
//!
//! Every family of primitives is a closed set; the ids below are the only
//! values a factory can produce. Their `name()` is the canonical registry
//! name.

use crate::error::{Error, Result};
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! named_id {
    ($(#[$meta:meta])* $ty:ident { $($(#[$vmeta:meta])* $variant:ident => $name:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $ty {
            $($(#[$vmeta])* $variant),+
        }

        impl $ty {
            /// Every member of the family
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Canonical algorithm name
            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_id! {
    /// Block ciphers
    CipherId {
        /// Rijndael with a 128-bit block
        Aes => "aes",
        /// Identity transformation, used for testing modes
        Null => "null",
        /// The 32-round AES finalist by Anderson, Biham and Knudsen
        Serpent => "serpent",
    }
}

named_id! {
    /// Message digests
    HashId {
        Md4 => "md4",
        Md5 => "md5",
        /// SHA-1
        Sha160 => "sha-160",
        Sha256 => "sha-256",
        Ripemd128 => "ripemd128",
        Ripemd160 => "ripemd160",
        Whirlpool => "whirlpool",
    }
}

named_id! {
    /// Padding schemes
    PadId {
        Pkcs7 => "pkcs7",
        /// Trailing bit complement
        Tbc => "tbc",
    }
}

named_id! {
    /// Pseudo-random generators
    PrngId {
        /// Hash chain over a seed
        Md => "md",
        /// Integer counter mode over a block cipher
        Icm => "icm",
    }
}

named_id! {
    /// Block cipher modes of operation
    ModeId {
        Ecb => "ecb",
        Ctr => "ctr",
        Icm => "icm",
        Ofb => "ofb",
    }
}

named_id! {
    /// Signature schemes
    SignatureId {
        Dss => "dss",
        RsaPss => "rsa-pss",
    }
}

named_id! {
    /// Key-pair generators
    KeyPairId {
        Dss => "dss",
        Rsa => "rsa",
    }
}

/// Message authentication codes
///
/// HMAC is parameterised by any registered digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MacId {
    Hmac(HashId),
    Tmmh16,
}

impl MacId {
    /// Canonical algorithm name, `hmac-<digest>` for HMAC
    pub fn name(self) -> String {
        match self {
            MacId::Hmac(hash) => format!("hmac-{}", hash.name()),
            MacId::Tmmh16 => "tmmh16".to_string(),
        }
    }
}

impl fmt::Display for MacId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Direction a mode of operation is keyed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    #[default]
    Encryption,
    Decryption,
}

/// Interchange formats understood by the key and signature codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyFormat {
    /// Magic-tagged, length-prefixed big-endian integers
    Raw,
}

impl KeyFormat {
    /// Numeric identifier of the format
    pub const fn id(self) -> u8 {
        match self {
            KeyFormat::Raw => 1,
        }
    }

    /// Resolve a numeric format identifier
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            1 => Ok(KeyFormat::Raw),
            _ => Err(Error::param(
                "key format",
                format!("unknown format identifier {}", id),
            )),
        }
    }
}

/// Exported chaining state of a message digest
///
/// `chaining` is the serialised compression state, `buffer` the tail not
/// yet compressed and `count` the number of bytes absorbed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashState {
    pub algorithm: &'static str,
    pub chaining: Vec<u8>,
    pub buffer: Vec<u8>,
    pub count: u64,
}
