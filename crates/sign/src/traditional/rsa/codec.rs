use super::keys::{RsaPrivateKey, RsaPublicKey};
use super::pss::RsaPssSignature;
use crate::codec::{RawReader, RawWriter};
use crate::error::{Result, ResultExt};
use gcrypto_api::{KeyCodec, KeyFormat, SignatureCodec};
use gcrypto_params::codec::{
    MAGIC_RAW_RSA_PRIVATE_KEY, MAGIC_RAW_RSA_PSS_SIGNATURE, MAGIC_RAW_RSA_PUBLIC_KEY,
};

/// Raw encoding of RSA keys and RSA-PSS signatures
///
/// Public keys carry `n, e`; private keys carry `p, q, e, d` and the
/// remaining components are recomputed on decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct RsaRawCodec;

impl RsaRawCodec {
    pub fn new() -> Self {
        Self
    }
}

impl KeyCodec for RsaRawCodec {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;

    fn format(&self) -> KeyFormat {
        KeyFormat::Raw
    }

    fn encode_public_key(&self, key: &RsaPublicKey) -> Result<Vec<u8>> {
        Ok(RawWriter::new("rsa public key", MAGIC_RAW_RSA_PUBLIC_KEY)
            .integer(key.n())?
            .integer(key.e())?
            .finish())
    }

    fn decode_public_key(&self, bytes: &[u8]) -> Result<RsaPublicKey> {
        let mut reader = RawReader::new("rsa public key", MAGIC_RAW_RSA_PUBLIC_KEY, bytes)?;
        let n = reader.integer()?;
        let e = reader.integer()?;
        reader.finish()?;
        Ok(RsaPublicKey::new(n, e))
    }

    fn encode_private_key(&self, key: &RsaPrivateKey) -> Result<Vec<u8>> {
        Ok(RawWriter::new("rsa private key", MAGIC_RAW_RSA_PRIVATE_KEY)
            .integer(key.p())?
            .integer(key.q())?
            .integer(key.e())?
            .integer(key.d())?
            .finish())
    }

    /// # Errors
    ///
    /// Besides the framing errors, `InvalidKey` when the components do not
    /// form a usable key.
    fn decode_private_key(&self, bytes: &[u8]) -> Result<RsaPrivateKey> {
        let mut reader = RawReader::new("rsa private key", MAGIC_RAW_RSA_PRIVATE_KEY, bytes)?;
        let p = reader.integer()?;
        let q = reader.integer()?;
        let e = reader.integer()?;
        let d = reader.integer()?;
        reader.finish()?;
        RsaPrivateKey::from_components(p, q, e, d).with_context("rsa private key")
    }
}

impl SignatureCodec for RsaRawCodec {
    type Signature = RsaPssSignature;

    fn format(&self) -> KeyFormat {
        KeyFormat::Raw
    }

    fn encode_signature(&self, signature: &RsaPssSignature) -> Result<Vec<u8>> {
        Ok(RawWriter::new("rsa-pss signature", MAGIC_RAW_RSA_PSS_SIGNATURE)
            .octets(signature.as_bytes())?
            .finish())
    }

    fn decode_signature(&self, bytes: &[u8]) -> Result<RsaPssSignature> {
        let mut reader = RawReader::new("rsa-pss signature", MAGIC_RAW_RSA_PSS_SIGNATURE, bytes)?;
        let signature = reader.octets()?.to_vec();
        reader.finish()?;
        Ok(RsaPssSignature::new(signature))
    }
}
