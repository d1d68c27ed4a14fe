//! Montgomery multiplication context for modular exponentiation.

use super::ops::mul_limbs;
use super::{BigNum, DoubleLimb, Limb, LIMB_BITS};
use crate::error::{Error, Result};
use zeroize::Zeroize;

/// Exponent window width in bits
const WINDOW: usize = 4;

/// Montgomery multiplication context
///
/// Values in Montgomery form are `aR mod N` with `R = 2^(64 * limbs(N))`.
pub struct MontgomeryCtx {
    modulus: BigNum,
    /// Number of limbs in the modulus
    size: usize,
    /// -N^-1 mod 2^64
    n_prime: u64,
    /// R^2 mod N, used for encoding into Montgomery form
    r_squared: BigNum,
}

impl MontgomeryCtx {
    /// Create a context for an odd modulus
    pub fn new(modulus: &BigNum) -> Result<Self> {
        if modulus.is_zero() || modulus.is_even() {
            return Err(Error::param("montgomery context", "modulus must be odd"));
        }
        let size = modulus.limbs().len();
        let r_squared = BigNum::one()
            .shl(2 * size * LIMB_BITS)
            .div_rem_nonzero(modulus)
            .1;
        Ok(Self {
            modulus: modulus.clone(),
            size,
            n_prime: neg_inv_limb(modulus.low_u64()),
            r_squared,
        })
    }

    pub fn modulus(&self) -> &BigNum {
        &self.modulus
    }

    /// aR mod N
    pub fn to_mont(&self, a: &BigNum) -> BigNum {
        let reduced = a.div_rem_nonzero(&self.modulus).1;
        self.mul(&reduced, &self.r_squared)
    }

    /// aR^-1 mod N
    pub fn from_mont(&self, a: &BigNum) -> BigNum {
        self.reduce(a.limbs())
    }

    /// abR^-1 mod N for a, b < N
    pub fn mul(&self, a: &BigNum, b: &BigNum) -> BigNum {
        let mut product = mul_limbs(a.limbs(), b.limbs());
        let out = self.reduce(&product);
        product.zeroize();
        out
    }

    /// REDC: t * R^-1 mod N for t < N * R
    fn reduce(&self, t: &[Limb]) -> BigNum {
        let n = self.size;
        let m = self.modulus.limbs();
        let mut work = vec![0u64; 2 * n + 2];
        let len = t.len().min(work.len());
        work[..len].copy_from_slice(&t[..len]);

        for i in 0..n {
            let q = work[i].wrapping_mul(self.n_prime);
            let mut carry: DoubleLimb = 0;
            for j in 0..n {
                let s = q as DoubleLimb * m[j] as DoubleLimb + work[i + j] as DoubleLimb + carry;
                work[i + j] = s as Limb;
                carry = s >> LIMB_BITS;
            }
            let mut k = i + n;
            while carry != 0 && k < work.len() {
                let s = work[k] as DoubleLimb + carry;
                work[k] = s as Limb;
                carry = s >> LIMB_BITS;
                k += 1;
            }
        }

        let mut result = BigNum::from_limbs(work[n..].to_vec());
        work.zeroize();
        if result >= self.modulus {
            result = result.sub(&self.modulus);
        }
        result
    }

    /// base^exp mod N with a fixed 4-bit window
    pub fn exp(&self, base: &BigNum, exp: &BigNum) -> BigNum {
        let one = self.to_mont(&BigNum::one());
        let base = self.to_mont(base);

        let mut table = Vec::with_capacity(1 << WINDOW);
        table.push(one.clone());
        table.push(base.clone());
        for i in 2..(1 << WINDOW) {
            let next = self.mul(&table[i - 1], &base);
            table.push(next);
        }

        let mut acc = one;
        for w in (0..exp.bits().div_ceil(WINDOW)).rev() {
            for _ in 0..WINDOW {
                acc = self.mul(&acc, &acc);
            }
            let mut idx = 0usize;
            for k in 0..WINDOW {
                if exp.bit(w * WINDOW + k) {
                    idx |= 1 << k;
                }
            }
            if idx != 0 {
                acc = self.mul(&acc, &table[idx]);
            }
        }
        self.from_mont(&acc)
    }
}

/// -m0^-1 mod 2^64 by Newton iteration; m0 must be odd
fn neg_inv_limb(m0: u64) -> u64 {
    // m0 * m0 = 1 mod 8, so m0 is its own inverse to 3 bits; each step doubles
    let mut inv = m0;
    for _ in 0..5 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
    }
    inv.wrapping_neg()
}
