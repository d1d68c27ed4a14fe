use crate::error::{validate, Error, Result};
use gcrypto_algorithms::BigNum;
use gcrypto_internal::ct_eq;
use std::fmt;

/// RSA public key `(n, e)`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RsaPublicKey {
    n: BigNum,
    e: BigNum,
}

impl RsaPublicKey {
    pub fn new(n: BigNum, e: BigNum) -> Self {
        Self { n, e }
    }

    pub fn n(&self) -> &BigNum {
        &self.n
    }

    pub fn e(&self) -> &BigNum {
        &self.e
    }

    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    /// Modulus length in bytes
    pub fn size(&self) -> usize {
        self.n.bits().div_ceil(8)
    }

    pub(crate) fn check(&self) -> Result<()> {
        const CONTEXT: &str = "rsa public key";
        validate::key(self.n.is_odd() && self.n.bits() > 8, CONTEXT, "modulus must be odd")?;
        validate::key(
            self.e.is_odd() && self.e > BigNum::one() && self.e < self.n,
            CONTEXT,
            "exponent must be odd and lie in (1, n)",
        )
    }
}

/// RSA private key with its CRT components
///
/// Built from `(p, q, e, d)`; `n`, `d mod (p-1)`, `d mod (q-1)` and
/// `q^-1 mod p` are derived once.
#[derive(Clone)]
pub struct RsaPrivateKey {
    n: BigNum,
    e: BigNum,
    d: BigNum,
    p: BigNum,
    q: BigNum,
    dp: BigNum,
    dq: BigNum,
    q_inv: BigNum,
}

impl RsaPrivateKey {
    /// Assemble a key from its primes and exponents
    ///
    /// # Errors
    ///
    /// `InvalidKey` when the primes are equal, even or too small, or when
    /// `q` has no inverse modulo `p`.
    pub fn from_components(p: BigNum, q: BigNum, e: BigNum, d: BigNum) -> Result<Self> {
        const CONTEXT: &str = "rsa private key";
        validate::key(p.is_odd() && p.bits() > 2, CONTEXT, "p must be an odd prime")?;
        validate::key(q.is_odd() && q.bits() > 2, CONTEXT, "q must be an odd prime")?;
        validate::key(p != q, CONTEXT, "p and q must differ")?;
        validate::key(!d.is_zero(), CONTEXT, "private exponent must be positive")?;

        let n = p.mul(&q);
        let dp = d.rem(&p.sub_u64(1)?)?;
        let dq = d.rem(&q.sub_u64(1)?)?;
        let q_inv = q
            .mod_inverse(&p)
            .map_err(|_| Error::key(CONTEXT, "q is not invertible modulo p"))?;
        Ok(Self {
            n,
            e,
            d,
            p,
            q,
            dp,
            dq,
            q_inv,
        })
    }

    /// Derive `d = e^-1 mod (p-1)(q-1)` and assemble the key
    pub fn from_primes(p: BigNum, q: BigNum, e: BigNum) -> Result<Self> {
        let phi = p.sub_u64(1)?.mul(&q.sub_u64(1)?);
        let d = e
            .mod_inverse(&phi)
            .map_err(|_| Error::key("rsa private key", "e is not invertible modulo phi(n)"))?;
        Self::from_components(p, q, e, d)
    }

    pub fn n(&self) -> &BigNum {
        &self.n
    }

    pub fn e(&self) -> &BigNum {
        &self.e
    }

    pub fn d(&self) -> &BigNum {
        &self.d
    }

    pub fn p(&self) -> &BigNum {
        &self.p
    }

    pub fn q(&self) -> &BigNum {
        &self.q
    }

    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey::new(self.n.clone(), self.e.clone())
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.public_key().check()
    }

    /// `c^d mod n` through the CRT, checked against the public exponent
    pub(crate) fn private_op(&self, c: &BigNum) -> Result<BigNum> {
        if *c >= self.n {
            return Err(Error::param("rsa private operation", "input exceeds the modulus"));
        }
        let m1 = c.mod_exp(&self.dp, &self.p)?;
        let m2 = c.mod_exp(&self.dq, &self.q)?;
        let h = self.q_inv.mod_mul(&m1.mod_sub(&m2, &self.p)?, &self.p)?;
        let m = m2.add(&h.mul(&self.q));

        if m.mod_exp(&self.e, &self.n)? != *c {
            return Err(Error::Other {
                context: "rsa private operation",
                message: "CRT result does not match the public exponent".into(),
            });
        }
        Ok(m)
    }
}

impl PartialEq for RsaPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p
            && self.q == other.q
            && self.e == other.e
            && ct_eq(self.d.to_bytes_be(), other.d.to_bytes_be())
    }
}

impl Eq for RsaPrivateKey {}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("modulus_bits", &self.n.bits())
            .field("e", &self.e)
            .field("d", &"<redacted>")
            .finish()
    }
}

/// A generated RSA key pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public: RsaPublicKey,
    pub private: RsaPrivateKey,
}
