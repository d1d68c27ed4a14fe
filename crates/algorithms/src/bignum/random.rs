//! Uniform sampling of big integers

use super::BigNum;
use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

impl BigNum {
    /// A uniformly random value of at most `bits` bits
    pub fn random_bits<R: RngCore + CryptoRng>(bits: usize, rng: &mut R) -> BigNum {
        if bits == 0 {
            return BigNum::zero();
        }
        let len = bits.div_ceil(8);
        let mut buf = Zeroizing::new(vec![0u8; len]);
        rng.fill_bytes(&mut buf);
        let excess = len * 8 - bits;
        buf[0] &= 0xff >> excess;
        BigNum::from_bytes_be(&buf)
    }

    /// A uniformly random value in `[0, bound)` by rejection sampling
    pub fn random_below<R: RngCore + CryptoRng>(bound: &BigNum, rng: &mut R) -> Result<BigNum> {
        if bound.is_zero() {
            return Err(Error::param("random big integer", "bound must be positive"));
        }
        let bits = bound.bits();
        loop {
            let candidate = BigNum::random_bits(bits, rng);
            if candidate < *bound {
                return Ok(candidate);
            }
        }
    }

    /// A uniformly random value in `[low, high)`
    pub fn random_range<R: RngCore + CryptoRng>(
        low: &BigNum,
        high: &BigNum,
        rng: &mut R,
    ) -> Result<BigNum> {
        let span = high
            .checked_sub(low)
            .filter(|s| !s.is_zero())
            .ok_or_else(|| Error::param("random big integer", "empty range"))?;
        Ok(low.add(&BigNum::random_below(&span, rng)?))
    }
}
