use super::fixture;
use super::keys::{RsaKeyPair, RsaPrivateKey};
use crate::error::{Error, Result};
use gcrypto_algorithms::BigNum;
use gcrypto_api::{KeyPairConfig, KeyPairGenerator};
use gcrypto_params::traditional::rsa::{
    RSA_DEFAULT_MODULUS_BITS, RSA_MIN_MODULUS_BITS, RSA_PUBLIC_EXPONENT,
};
use rand::{CryptoRng, RngCore};

const CONTEXT: &str = "rsa key-pair generator";

/// RSA key-pair generator with `e = 65537`
///
/// `p` has `ceil(L/2)` bits and `q` the remaining `L - ceil(L/2)`; both
/// have their two top bits set so that `n` is exactly `L` bits long.
#[derive(Clone, Debug)]
pub struct RsaKeyPairGenerator {
    modulus_bits: usize,
}

impl Default for RsaKeyPairGenerator {
    fn default() -> Self {
        Self {
            modulus_bits: RSA_DEFAULT_MODULUS_BITS,
        }
    }
}

impl RsaKeyPairGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }
}

/// A random prime of exactly `bits` bits with `gcd(prime - 1, e) = 1`
fn random_prime<R: CryptoRng + RngCore>(bits: usize, e: &BigNum, rng: &mut R) -> BigNum {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let mut candidate = BigNum::random_bits(bits, rng);
        candidate.set_bit(bits - 1);
        candidate.set_bit(bits - 2);
        candidate.set_bit(0);
        let coprime = candidate
            .sub_u64(1)
            .map_or(false, |less_one| less_one.gcd(e).is_one());
        if coprime && candidate.is_probable_prime() {
            tracing::debug!(bits, attempts, "found rsa prime");
            return candidate;
        }
    }
}

impl KeyPairGenerator for RsaKeyPairGenerator {
    type KeyPair = RsaKeyPair;

    fn name(&self) -> &'static str {
        "rsa"
    }

    /// `use_defaults` has no meaning for RSA and is ignored
    fn setup(&mut self, config: &KeyPairConfig) -> Result<()> {
        let bits = config.modulus_bits.unwrap_or(RSA_DEFAULT_MODULUS_BITS);
        if bits < RSA_MIN_MODULUS_BITS {
            return Err(Error::param(
                CONTEXT,
                format!("modulus length {} is below {}", bits, RSA_MIN_MODULUS_BITS),
            ));
        }
        self.modulus_bits = bits;
        Ok(())
    }

    fn generate<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<RsaKeyPair> {
        let bits = self.modulus_bits;
        let e = BigNum::from_u64(RSA_PUBLIC_EXPONENT);
        let p_bits = bits.div_ceil(2);
        let q_bits = bits - p_bits;

        let p = random_prime(p_bits, &e, rng);
        let q = loop {
            let q = random_prime(q_bits, &e, rng);
            if q != p {
                break q;
            }
        };
        let private = RsaPrivateKey::from_primes(p, q, e)?;
        if private.modulus_bits() != bits {
            return Err(Error::Other {
                context: CONTEXT,
                message: format!("generated a {}-bit modulus", private.modulus_bits()),
            });
        }
        tracing::debug!(bits, "generated rsa key pair");
        Ok(RsaKeyPair {
            public: private.public_key(),
            private,
        })
    }

    /// Re-derives the fixture key from its primes
    fn self_test(&self) -> bool {
        let derive = || -> Result<bool> {
            let key = RsaPrivateKey::from_primes(
                BigNum::from_hex(fixture::P)?,
                BigNum::from_hex(fixture::Q)?,
                BigNum::from_u64(RSA_PUBLIC_EXPONENT),
            )?;
            let message = BigNum::from_u64(0x5a5a_5a5a);
            let signed = key.private_op(&message)?;
            Ok(*key.d() == BigNum::from_hex(fixture::D)?
                && *key.n() == BigNum::from_hex(fixture::N)?
                && signed.mod_exp(key.e(), key.n())? == message)
        };
        derive().unwrap_or(false)
    }
}
