use super::keys::{DssDomainParams, DssKeyPair, DssPrivateKey};
use crate::error::{validate, Error, Result};
use gcrypto_algorithms::hash::Sha160;
use gcrypto_algorithms::BigNum;
use gcrypto_api::{KeyPairConfig, KeyPairGenerator};
use gcrypto_params::traditional::dss::{
    default_domain, DssDomain, DSS_DEFAULT_MODULUS_BITS, DSS_DOMAIN_1024, DSS_DOMAIN_512,
    DSS_DOMAIN_768, DSS_MAX_COUNTER, DSS_MAX_MODULUS_BITS, DSS_MIN_MODULUS_BITS, DSS_MODULUS_STEP,
    DSS_Q_BITS,
};
use rand::{CryptoRng, RngCore};

const CONTEXT: &str = "dss key-pair generator";

/// Width of the domain-generation seed in bytes
const SEED_LEN: usize = DSS_Q_BITS / 8;

/// DSS key-pair generator
///
/// Uses the precomputed 512, 768 and 1024-bit domains unless asked not to,
/// and otherwise searches for fresh domain parameters with the SHA-1
/// seeded procedure of FIPS 186-2, Appendix 2.
#[derive(Clone, Debug)]
pub struct DssKeyPairGenerator {
    modulus_bits: usize,
    use_defaults: bool,
}

impl Default for DssKeyPairGenerator {
    fn default() -> Self {
        Self {
            modulus_bits: DSS_DEFAULT_MODULUS_BITS,
            use_defaults: true,
        }
    }
}

impl DssKeyPairGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }

    fn domain<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<DssDomainParams> {
        match default_domain(self.modulus_bits) {
            Some(domain) if self.use_defaults => DssDomainParams::from_default(&domain),
            _ => generate_domain(self.modulus_bits, rng),
        }
    }
}

/// `SHA-1((seed + offset) mod 2^160)` as an integer
fn hash_seed(seed: &BigNum, offset: u64, wrap: &BigNum) -> Result<BigNum> {
    let value = seed.add_u64(offset).rem(wrap)?;
    Ok(BigNum::from_bytes_be(&Sha160::hash(
        &value.to_bytes_be_padded(SEED_LEN)?,
    )))
}

/// Smallest `g = h^((p-1)/q) mod p` above one, for `h = 2, 3, ...`
fn find_generator(p: &BigNum, q: &BigNum) -> Result<BigNum> {
    let (exponent, _) = p.sub_u64(1)?.div_rem(q)?;
    let mut h = BigNum::from_u64(2);
    while h < *p {
        let g = h.mod_exp(&exponent, p)?;
        if g > BigNum::one() {
            return Ok(g);
        }
        h = h.add_u64(1);
    }
    Err(Error::param(CONTEXT, "no generator of the subgroup exists"))
}

/// Generate domain parameters for a `bits`-bit modulus
///
/// Follows FIPS 186-2, Appendix 2.2: a 160-bit prime `q` is derived from a
/// random seed, then up to 4096 candidates `p = X - (X mod 2q) + 1` are
/// built from successive hashes of the seed before a new seed is drawn.
pub fn generate_domain<R: CryptoRng + RngCore>(
    bits: usize,
    rng: &mut R,
) -> Result<DssDomainParams> {
    check_modulus_bits(bits)?;
    let n = (bits - 1) / DSS_Q_BITS;
    let b = (bits - 1) % DSS_Q_BITS;
    let wrap = BigNum::one().shl(DSS_Q_BITS);
    let tail = BigNum::one().shl(b);
    let floor = BigNum::one().shl(bits - 1);

    let mut seeds = 0usize;
    loop {
        seeds += 1;
        let mut seed_bytes = [0u8; SEED_LEN];
        rng.fill_bytes(&mut seed_bytes);
        let seed = BigNum::from_bytes_be(&seed_bytes);

        let u = xor(&hash_seed(&seed, 0, &wrap)?, &hash_seed(&seed, 1, &wrap)?)?;
        let mut q = u;
        q.set_bit(DSS_Q_BITS - 1);
        q.set_bit(0);
        if !q.is_probable_prime() {
            continue;
        }
        tracing::debug!(seeds, "found subgroup order candidate");

        let two_q = q.shl(1);
        let mut offset = 2u64;
        for counter in 0..DSS_MAX_COUNTER {
            let mut w = BigNum::zero();
            for k in 0..=n {
                let mut v = hash_seed(&seed, offset + k as u64, &wrap)?;
                if k == n {
                    v = v.rem(&tail)?;
                }
                w = w.add(&v.shl(k * DSS_Q_BITS));
            }
            let x = w.add(&floor);
            let c = x.rem(&two_q)?;
            let p = x
                .add_u64(1)
                .checked_sub(&c)
                .ok_or_else(|| Error::param(CONTEXT, "modulus candidate underflow"))?;

            if p >= floor && p.is_probable_prime() {
                tracing::debug!(bits, seeds, counter, "found modulus");
                let g = find_generator(&p, &q)?;
                return Ok(DssDomainParams::new(p, q, g));
            }
            offset += n as u64 + 1;
        }
        tracing::debug!(bits, seeds, "counter exhausted, drawing a new seed");
    }
}

/// Bitwise xor of two values of equal width
fn xor(a: &BigNum, b: &BigNum) -> Result<BigNum> {
    let mut left = a.to_bytes_be_padded(SEED_LEN)?;
    let right = b.to_bytes_be_padded(SEED_LEN)?;
    gcrypto_internal::xor_into(&mut left, &right);
    Ok(BigNum::from_bytes_be(&left))
}

fn check_modulus_bits(bits: usize) -> Result<()> {
    if !(DSS_MIN_MODULUS_BITS..=DSS_MAX_MODULUS_BITS).contains(&bits)
        || bits % DSS_MODULUS_STEP != 0
    {
        return Err(Error::param(
            CONTEXT,
            format!(
                "modulus length {} is not a multiple of {} in {}..={}",
                bits, DSS_MODULUS_STEP, DSS_MIN_MODULUS_BITS, DSS_MAX_MODULUS_BITS
            ),
        ));
    }
    Ok(())
}

/// Structural checks on one precomputed domain
fn domain_is_consistent(domain: &DssDomain) -> Result<bool> {
    let params = DssDomainParams::from_default(domain)?;
    let (p, q, g) = (params.p(), params.q(), params.g());
    let (_, rem) = p.sub_u64(1)?.div_rem(q)?;
    Ok(params.bits() == domain.bits
        && q.bits() == DSS_Q_BITS
        && q.is_probable_prime()
        && rem.is_zero()
        && *g > BigNum::one()
        && g.mod_exp(q, p)?.is_one())
}

impl KeyPairGenerator for DssKeyPairGenerator {
    type KeyPair = DssKeyPair;

    fn name(&self) -> &'static str {
        "dss"
    }

    fn setup(&mut self, config: &KeyPairConfig) -> Result<()> {
        let bits = config.modulus_bits.unwrap_or(DSS_DEFAULT_MODULUS_BITS);
        check_modulus_bits(bits)?;
        self.modulus_bits = bits;
        self.use_defaults = config.use_defaults.unwrap_or(true);
        Ok(())
    }

    fn generate<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<DssKeyPair> {
        let domain = self.domain(rng)?;
        validate::parameter(
            domain.bits() == self.modulus_bits,
            CONTEXT,
            "domain has the wrong size",
        )?;

        let x = BigNum::random_range(&BigNum::one(), domain.q(), rng)?;
        let private = DssPrivateKey::new(domain, x);
        let public = private.public_key()?;
        tracing::debug!(bits = self.modulus_bits, "generated dss key pair");
        Ok(DssKeyPair { public, private })
    }

    /// The precomputed domains are checked; fresh searches are not run
    fn self_test(&self) -> bool {
        [DSS_DOMAIN_512, DSS_DOMAIN_768, DSS_DOMAIN_1024]
            .iter()
            .all(|domain| domain_is_consistent(domain).unwrap_or(false))
    }
}
