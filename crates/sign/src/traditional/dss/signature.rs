use super::keys::{DssDomainParams, DssPrivateKey, DssPublicKey};
use crate::error::{Error, Result};
use gcrypto_algorithms::hash::Sha160;
use gcrypto_algorithms::BigNum;
use gcrypto_api::{MessageDigest, SignatureScheme};
use gcrypto_params::traditional::dss::DSS_DOMAIN_512;
use rand::{CryptoRng, RngCore};

const CONTEXT: &str = "dss";

/// Known answer over the 512-bit default domain and the message "abc"
const SELF_TEST_X: &str = "2070b3223dba372fde1c0ffc7b2e3b498b260614";
const SELF_TEST_K: &str = "358dad571462710f50e254cf1a376b2bdeaadfbf";
const SELF_TEST_R: &str = "69ec8d291291e276e24e1fe2137e4eabae34d5c1";
const SELF_TEST_S: &str = "77ef6fd8adcb63b08bb021db72b90748780eb7e2";

/// A DSS signature `(r, s)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DssSignature {
    r: BigNum,
    s: BigNum,
}

impl DssSignature {
    pub fn new(r: BigNum, s: BigNum) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &BigNum {
        &self.r
    }

    pub fn s(&self) -> &BigNum {
        &self.s
    }
}

#[derive(Clone)]
enum Binding {
    Sign(DssPrivateKey),
    Verify(DssPublicKey),
}

/// DSS signature instance over SHA-160
#[derive(Clone, Default)]
pub struct Dss {
    hash: Sha160,
    binding: Option<Binding>,
}

impl Dss {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digest of the absorbed message as an integer; resets the digest
    fn message_representative(&mut self) -> BigNum {
        BigNum::from_bytes_be(&self.hash.digest())
    }
}

/// One signing attempt with nonce `k`; `None` when `r` or `s` is zero
pub(crate) fn sign_digest(
    key: &DssPrivateKey,
    h: &BigNum,
    k: &BigNum,
) -> Result<Option<DssSignature>> {
    let (p, q, g) = (key.domain().p(), key.domain().q(), key.domain().g());

    let r = g.mod_exp(k, p)?.rem(q)?;
    if r.is_zero() {
        return Ok(None);
    }
    let k_inv = k.mod_inverse(q)?;
    let xr = key.x().mod_mul(&r, q)?;
    let s = k_inv.mod_mul(&h.add(&xr), q)?;
    if s.is_zero() {
        return Ok(None);
    }
    Ok(Some(DssSignature::new(r, s)))
}

/// Check `signature` against the digest integer `h`
pub(crate) fn verify_digest(
    key: &DssPublicKey,
    h: &BigNum,
    signature: &DssSignature,
) -> Result<bool> {
    let (p, q, g) = (key.domain().p(), key.domain().q(), key.domain().g());
    let (r, s) = (&signature.r, &signature.s);
    if r.is_zero() || s.is_zero() || r >= q || s >= q {
        return Ok(false);
    }

    let w = match s.mod_inverse(q) {
        Ok(w) => w,
        Err(_) => return Ok(false),
    };
    let u1 = h.mod_mul(&w, q)?;
    let u2 = r.mod_mul(&w, q)?;
    let v = g
        .mod_exp(&u1, p)?
        .mod_mul(&key.y().mod_exp(&u2, p)?, p)?
        .rem(q)?;
    Ok(v == *r)
}

fn known_answer() -> Result<bool> {
    let domain = DssDomainParams::from_default(&DSS_DOMAIN_512)?;
    let private = DssPrivateKey::new(domain, BigNum::from_hex(SELF_TEST_X)?);
    let public = private.public_key()?;
    let h = BigNum::from_bytes_be(&Sha160::hash(b"abc"));

    let expected = DssSignature::new(
        BigNum::from_hex(SELF_TEST_R)?,
        BigNum::from_hex(SELF_TEST_S)?,
    );
    let signature = match sign_digest(&private, &h, &BigNum::from_hex(SELF_TEST_K)?)? {
        Some(signature) => signature,
        None => return Ok(false),
    };
    Ok(signature == expected
        && verify_digest(&public, &h, &signature)?
        && !verify_digest(&public, &h.add_u64(1), &signature)?)
}

impl SignatureScheme for Dss {
    type PublicKey = DssPublicKey;
    type PrivateKey = DssPrivateKey;
    type Signature = DssSignature;

    fn name(&self) -> &'static str {
        CONTEXT
    }

    fn setup_sign(&mut self, key: &DssPrivateKey) -> Result<()> {
        key.check()?;
        self.hash.reset();
        self.binding = Some(Binding::Sign(key.clone()));
        Ok(())
    }

    fn setup_verify(&mut self, key: &DssPublicKey) -> Result<()> {
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

    fn sign_with_rng<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<DssSignature> {
        let key = match &self.binding {
            Some(Binding::Sign(key)) => key.clone(),
            Some(Binding::Verify(_)) => {
                return Err(Error::state(CONTEXT, "instance is set up for verification"))
            }
            None => return Err(Error::state(CONTEXT, "no key is bound")),
        };
        let h = self.message_representative();
        let one = BigNum::one();
        loop {
            let k = BigNum::random_range(&one, key.domain().q(), rng)?;
            if let Some(signature) = sign_digest(&key, &h, &k)? {
                return Ok(signature);
            }
            tracing::debug!("dss nonce produced a zero component, retrying");
        }
    }

    fn verify(&mut self, signature: &DssSignature) -> Result<bool> {
        let key = match &self.binding {
            Some(Binding::Verify(key)) => key.clone(),
            Some(Binding::Sign(_)) => {
                return Err(Error::state(CONTEXT, "instance is set up for signing"))
            }
            None => return Err(Error::state(CONTEXT, "no key is bound")),
        };
        let h = self.message_representative();
        verify_digest(&key, &h, signature)
    }

    fn self_test(&self) -> bool {
        known_answer().unwrap_or(false)
    }
}
