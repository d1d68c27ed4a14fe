use super::keys::{DssDomainParams, DssPrivateKey, DssPublicKey};
use super::signature::DssSignature;
use crate::codec::{RawReader, RawWriter};
use crate::error::Result;
use gcrypto_api::{KeyCodec, KeyFormat, SignatureCodec};
use gcrypto_params::codec::{
    MAGIC_RAW_DSS_PRIVATE_KEY, MAGIC_RAW_DSS_PUBLIC_KEY, MAGIC_RAW_DSS_SIGNATURE,
};

/// Raw encoding of DSS keys and signatures
///
/// Keys carry `p, q, g` followed by `y` or `x`; signatures carry `r, s`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DssRawCodec;

impl DssRawCodec {
    pub fn new() -> Self {
        Self
    }
}

fn write_domain(writer: RawWriter, domain: &DssDomainParams) -> Result<RawWriter> {
    writer
        .integer(domain.p())?
        .integer(domain.q())?
        .integer(domain.g())
}

fn read_domain(reader: &mut RawReader<'_>) -> Result<DssDomainParams> {
    let p = reader.integer()?;
    let q = reader.integer()?;
    let g = reader.integer()?;
    Ok(DssDomainParams::new(p, q, g))
}

impl KeyCodec for DssRawCodec {
    type PublicKey = DssPublicKey;
    type PrivateKey = DssPrivateKey;

    fn format(&self) -> KeyFormat {
        KeyFormat::Raw
    }

    fn encode_public_key(&self, key: &DssPublicKey) -> Result<Vec<u8>> {
        let writer = RawWriter::new("dss public key", MAGIC_RAW_DSS_PUBLIC_KEY);
        Ok(write_domain(writer, key.domain())?.integer(key.y())?.finish())
    }

    fn decode_public_key(&self, bytes: &[u8]) -> Result<DssPublicKey> {
        let mut reader = RawReader::new("dss public key", MAGIC_RAW_DSS_PUBLIC_KEY, bytes)?;
        let domain = read_domain(&mut reader)?;
        let y = reader.integer()?;
        reader.finish()?;
        Ok(DssPublicKey::new(domain, y))
    }

    fn encode_private_key(&self, key: &DssPrivateKey) -> Result<Vec<u8>> {
        let writer = RawWriter::new("dss private key", MAGIC_RAW_DSS_PRIVATE_KEY);
        Ok(write_domain(writer, key.domain())?.integer(key.x())?.finish())
    }

    fn decode_private_key(&self, bytes: &[u8]) -> Result<DssPrivateKey> {
        let mut reader = RawReader::new("dss private key", MAGIC_RAW_DSS_PRIVATE_KEY, bytes)?;
        let domain = read_domain(&mut reader)?;
        let x = reader.integer()?;
        reader.finish()?;
        Ok(DssPrivateKey::new(domain, x))
    }
}

impl SignatureCodec for DssRawCodec {
    type Signature = DssSignature;

    fn format(&self) -> KeyFormat {
        KeyFormat::Raw
    }

    fn encode_signature(&self, signature: &DssSignature) -> Result<Vec<u8>> {
        Ok(RawWriter::new("dss signature", MAGIC_RAW_DSS_SIGNATURE)
            .integer(signature.r())?
            .integer(signature.s())?
            .finish())
    }

    fn decode_signature(&self, bytes: &[u8]) -> Result<DssSignature> {
        let mut reader = RawReader::new("dss signature", MAGIC_RAW_DSS_SIGNATURE, bytes)?;
        let r = reader.integer()?;
        let s = reader.integer()?;
        reader.finish()?;
        Ok(DssSignature::new(r, s))
    }
}
