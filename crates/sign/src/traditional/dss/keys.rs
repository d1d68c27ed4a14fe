use crate::error::{validate, Result};
use gcrypto_algorithms::BigNum;
use gcrypto_internal::ct_eq;
use gcrypto_params::traditional::dss::DssDomain;
use std::fmt;

/// The shared group `(p, q, g)` of a DSS key pair
#[derive(Clone, PartialEq, Eq)]
pub struct DssDomainParams {
    p: BigNum,
    q: BigNum,
    g: BigNum,
}

impl DssDomainParams {
    pub fn new(p: BigNum, q: BigNum, g: BigNum) -> Self {
        Self { p, q, g }
    }

    /// Parse one of the precomputed domains
    pub fn from_default(domain: &DssDomain) -> Result<Self> {
        Ok(Self {
            p: BigNum::from_hex(domain.p)?,
            q: BigNum::from_hex(domain.q)?,
            g: BigNum::from_hex(domain.g)?,
        })
    }

    pub fn p(&self) -> &BigNum {
        &self.p
    }

    pub fn q(&self) -> &BigNum {
        &self.q
    }

    pub fn g(&self) -> &BigNum {
        &self.g
    }

    /// Modulus length in bits
    pub fn bits(&self) -> usize {
        self.p.bits()
    }

    /// Structural checks before a key is bound to a scheme
    ///
    /// Primality is not re-checked here.
    pub(crate) fn check(&self) -> Result<()> {
        const CONTEXT: &str = "dss domain";
        validate::key(self.p.is_odd() && self.p.bits() > 1, CONTEXT, "p must be an odd prime")?;
        validate::key(
            self.q.is_odd() && self.q < self.p,
            CONTEXT,
            "q must be an odd prime below p",
        )?;
        validate::key(
            self.g > BigNum::one() && self.g < self.p,
            CONTEXT,
            "g must lie in (1, p)",
        )
    }
}

impl fmt::Debug for DssDomainParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DssDomainParams")
            .field("p_bits", &self.p.bits())
            .field("q_bits", &self.q.bits())
            .finish()
    }
}

/// DSS public key `y = g^x mod p`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DssPublicKey {
    domain: DssDomainParams,
    y: BigNum,
}

impl DssPublicKey {
    pub fn new(domain: DssDomainParams, y: BigNum) -> Self {
        Self { domain, y }
    }

    pub fn domain(&self) -> &DssDomainParams {
        &self.domain
    }

    pub fn y(&self) -> &BigNum {
        &self.y
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.domain.check()?;
        validate::key(
            self.y > BigNum::one() && self.y < self.domain.p,
            "dss public key",
            "y must lie in (1, p)",
        )
    }
}

/// DSS private key `x` in `(0, q)`
///
/// Two private keys are equal when both the domain and the secret match;
/// the secrets are compared in constant time.
#[derive(Clone)]
pub struct DssPrivateKey {
    domain: DssDomainParams,
    x: BigNum,
}

impl DssPrivateKey {
    pub fn new(domain: DssDomainParams, x: BigNum) -> Self {
        Self { domain, x }
    }

    pub fn domain(&self) -> &DssDomainParams {
        &self.domain
    }

    pub fn x(&self) -> &BigNum {
        &self.x
    }

    /// Derive the matching public key
    pub fn public_key(&self) -> Result<DssPublicKey> {
        let y = self.domain.g.mod_exp(&self.x, &self.domain.p)?;
        Ok(DssPublicKey::new(self.domain.clone(), y))
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.domain.check()?;
        validate::key(
            !self.x.is_zero() && self.x < self.domain.q,
            "dss private key",
            "x must lie in (0, q)",
        )
    }
}

impl PartialEq for DssPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        let width = self.domain.q.bits().div_ceil(8).max(1);
        let secrets_match = match (
            self.x.to_bytes_be_padded(width),
            other.x.to_bytes_be_padded(width),
        ) {
            (Ok(a), Ok(b)) => ct_eq(&a, &b),
            _ => false,
        };
        self.domain == other.domain && secrets_match
    }
}

impl Eq for DssPrivateKey {}

impl fmt::Debug for DssPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DssPrivateKey")
            .field("domain", &self.domain)
            .field("x", &"<redacted>")
            .finish()
    }
}

/// A generated DSS key pair sharing one domain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DssKeyPair {
    pub public: DssPublicKey,
    pub private: DssPrivateKey,
}
