use super::fixture;
use super::keys::{RsaPrivateKey, RsaPublicKey};
use crate::error::{Error, Result};
use gcrypto_algorithms::hash::Hash;
use gcrypto_algorithms::BigNum;
use gcrypto_api::{HashId, MessageDigest, SignatureScheme};
use gcrypto_internal::{ct_eq, xor_into};
use gcrypto_params::traditional::rsa::{
    RSA_PSS_DEFAULT_SALT_LEN, RSA_PSS_TRAILER, RSA_PUBLIC_EXPONENT,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

const CONTEXT: &str = "rsa-pss";

/// An RSA-PSS signature: a big-endian integer as wide as the modulus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPssSignature(Vec<u8>);

impl RsaPssSignature {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for RsaPssSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Clone)]
enum Binding {
    Sign(RsaPrivateKey),
    Verify(RsaPublicKey),
}

/// RSA-PSS signature instance
///
/// Hashes with SHA-160 and uses an empty salt unless configured otherwise.
/// The verifier must use the signer's digest and salt length.
#[derive(Clone)]
pub struct RsaPss {
    hash: Hash,
    salt_len: usize,
    binding: Option<Binding>,
}

impl Default for RsaPss {
    fn default() -> Self {
        Self::new()
    }
}

impl RsaPss {
    pub fn new() -> Self {
        Self::with_hash(HashId::Sha160)
    }

    pub fn with_hash(hash: HashId) -> Self {
        Self {
            hash: Hash::new(hash),
            salt_len: RSA_PSS_DEFAULT_SALT_LEN,
            binding: None,
        }
    }

    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len;
        self
    }

    pub fn hash_id(&self) -> HashId {
        self.hash.id()
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }
}

/// MGF1 mask of `len` bytes
fn mgf1(hash: HashId, seed: &[u8], len: usize) -> Vec<u8> {
    let mut mask = Vec::with_capacity(len + 64);
    let mut counter = 0u32;
    while mask.len() < len {
        let mut h = Hash::new(hash);
        h.update(seed);
        h.update(&counter.to_be_bytes());
        mask.extend_from_slice(&h.digest());
        counter += 1;
    }
    mask.truncate(len);
    mask
}

/// `Hash(0x00 * 8 || m_hash || salt)`
fn salted_hash(hash: HashId, m_hash: &[u8], salt: &[u8]) -> Vec<u8> {
    let mut h = Hash::new(hash);
    h.update(&[0u8; 8]);
    h.update(m_hash);
    h.update(salt);
    h.digest()
}

/// EMSA-PSS-ENCODE into `ceil(em_bits / 8)` bytes
fn emsa_pss_encode(
    hash: HashId,
    m_hash: &[u8],
    salt: &[u8],
    em_bits: usize,
) -> Result<Vec<u8>> {
    let h_len = m_hash.len();
    let em_len = em_bits.div_ceil(8);
    if em_len < h_len + salt.len() + 2 {
        return Err(Error::param(CONTEXT, "modulus too short for the digest and salt"));
    }

    let h = salted_hash(hash, m_hash, salt);
    let db_len = em_len - h_len - 1;
    let mut db = vec![0u8; db_len];
    db[db_len - salt.len() - 1] = 0x01;
    db[db_len - salt.len()..].copy_from_slice(salt);
    xor_into(&mut db, &mgf1(hash, &h, db_len));
    db[0] &= 0xff >> (8 * em_len - em_bits);

    let mut em = db;
    em.extend_from_slice(&h);
    em.push(RSA_PSS_TRAILER);
    Ok(em)
}

/// EMSA-PSS-VERIFY
fn emsa_pss_verify(
    hash: HashId,
    m_hash: &[u8],
    em: &[u8],
    em_bits: usize,
    salt_len: usize,
) -> bool {
    let h_len = m_hash.len();
    let em_len = em_bits.div_ceil(8);
    if em.len() != em_len
        || em_len < h_len + salt_len + 2
        || em[em_len - 1] != RSA_PSS_TRAILER
    {
        return false;
    }

    let db_len = em_len - h_len - 1;
    let (masked_db, rest) = em.split_at(db_len);
    let h = &rest[..h_len];
    let top = 0xffu8 >> (8 * em_len - em_bits);
    if masked_db[0] & !top != 0 {
        return false;
    }

    let mut db = masked_db.to_vec();
    xor_into(&mut db, &mgf1(hash, h, db_len));
    db[0] &= top;

    let separator = db_len - salt_len - 1;
    if db[..separator].iter().any(|&b| b != 0) || db[separator] != 0x01 {
        return false;
    }
    ct_eq(h, salted_hash(hash, m_hash, &db[separator + 1..]))
}

/// Sign a message digest with an explicit salt
pub(crate) fn sign_hash(
    key: &RsaPrivateKey,
    hash: HashId,
    m_hash: &[u8],
    salt: &[u8],
) -> Result<RsaPssSignature> {
    let em = Zeroizing::new(emsa_pss_encode(hash, m_hash, salt, key.modulus_bits() - 1)?);
    let s = key.private_op(&BigNum::from_bytes_be(&em))?;
    Ok(RsaPssSignature(s.to_bytes_be_padded(key.public_key().size())?))
}

/// Check a signature over a message digest
pub(crate) fn verify_hash(
    key: &RsaPublicKey,
    hash: HashId,
    m_hash: &[u8],
    signature: &RsaPssSignature,
    salt_len: usize,
) -> Result<bool> {
    if signature.0.len() != key.size() {
        return Ok(false);
    }
    let s = BigNum::from_bytes_be(&signature.0);
    if s >= *key.n() {
        return Ok(false);
    }
    let em_bits = key.modulus_bits() - 1;
    let m = s.mod_exp(key.e(), key.n())?;
    let em = match m.to_bytes_be_padded(em_bits.div_ceil(8)) {
        Ok(em) => em,
        Err(_) => return Ok(false),
    };
    Ok(emsa_pss_verify(hash, m_hash, &em, em_bits, salt_len))
}

pub(crate) fn fixture_key() -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_components(
        BigNum::from_hex(fixture::P)?,
        BigNum::from_hex(fixture::Q)?,
        BigNum::from_u64(RSA_PUBLIC_EXPONENT),
        BigNum::from_hex(fixture::D)?,
    )
}

fn digest_of(hash: HashId, data: &[u8]) -> Vec<u8> {
    let mut h = Hash::new(hash);
    h.update(data);
    h.digest()
}

fn known_answer() -> Result<bool> {
    let key = fixture_key()?;
    let public = key.public_key();
    let m_hash = digest_of(HashId::Sha160, b"abc");
    let signature = sign_hash(&key, HashId::Sha160, &m_hash, &[])?;

    let tampered = digest_of(HashId::Sha160, b"abd");
    Ok(signature.0 == BigNum::from_hex(fixture::SIGNATURE)?.to_bytes_be()
        && verify_hash(&public, HashId::Sha160, &m_hash, &signature, 0)?
        && !verify_hash(&public, HashId::Sha160, &tampered, &signature, 0)?)
}

impl SignatureScheme for RsaPss {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;
    type Signature = RsaPssSignature;

    fn name(&self) -> &'static str {
        CONTEXT
    }

    fn setup_sign(&mut self, key: &RsaPrivateKey) -> Result<()> {
        key.check()?;
        self.hash.reset();
        self.binding = Some(Binding::Sign(key.clone()));
        Ok(())
    }

    fn setup_verify(&mut self, key: &RsaPublicKey) -> Result<()> {
        key.check()?;
        self.hash.reset();
        self.binding = Some(Binding::Verify(key.clone()));
        Ok(())
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.binding.is_none() {
            return Err(Error::state(CONTEXT, "no key is bound"));
        }
        self.hash.update(data);
        Ok(())
    }

    fn sign_with_rng<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<RsaPssSignature> {
        let key = match &self.binding {
            Some(Binding::Sign(key)) => key.clone(),
            Some(Binding::Verify(_)) => {
                return Err(Error::state(CONTEXT, "instance is set up for verification"))
            }
            None => return Err(Error::state(CONTEXT, "no key is bound")),
        };
        let m_hash = self.hash.digest();
        let mut salt = Zeroizing::new(vec![0u8; self.salt_len]);
        rng.fill_bytes(&mut salt);
        sign_hash(&key, self.hash.id(), &m_hash, &salt)
    }

    fn verify(&mut self, signature: &RsaPssSignature) -> Result<bool> {
        let key = match &self.binding {
            Some(Binding::Verify(key)) => key.clone(),
            Some(Binding::Sign(_)) => {
                return Err(Error::state(CONTEXT, "instance is set up for signing"))
            }
            None => return Err(Error::state(CONTEXT, "no key is bound")),
        };
        let m_hash = self.hash.digest();
        verify_hash(&key, self.hash.id(), &m_hash, signature, self.salt_len)
    }

    fn self_test(&self) -> bool {
        known_answer().unwrap_or(false)
    }
}
