//! Key and signature codec contracts

use crate::types::KeyFormat;
use crate::Result;

/// Encoding of key objects in one interchange format
pub trait KeyCodec {
    type PublicKey;
    type PrivateKey;

    fn format(&self) -> KeyFormat;

    fn encode_public_key(&self, key: &Self::PublicKey) -> Result<Vec<u8>>;

    /// # Errors
    ///
    /// `InvalidParameter` on a magic tag or version mismatch, `CorruptData`
    /// on truncated input.
    fn decode_public_key(&self, bytes: &[u8]) -> Result<Self::PublicKey>;

    fn encode_private_key(&self, key: &Self::PrivateKey) -> Result<Vec<u8>>;

    fn decode_private_key(&self, bytes: &[u8]) -> Result<Self::PrivateKey>;
}

/// Encoding of signature values in one interchange format
pub trait SignatureCodec {
    type Signature;

    fn format(&self) -> KeyFormat;

    fn encode_signature(&self, signature: &Self::Signature) -> Result<Vec<u8>>;

    fn decode_signature(&self, bytes: &[u8]) -> Result<Self::Signature>;
}
