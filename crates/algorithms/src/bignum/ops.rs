//! Basic arithmetic operations for BigNum.

use super::{cmp_limbs, BigNum, DoubleLimb, Limb, MontgomeryCtx, LIMB_BITS};
use crate::error::{Error, Result};
use core::cmp::Ordering;

impl BigNum {
    /// self + other
    pub fn add(&self, other: &BigNum) -> BigNum {
        BigNum::from_limbs(add_limbs(&self.limbs, &other.limbs))
    }

    pub fn add_u64(&self, value: u64) -> BigNum {
        self.add(&BigNum::from_u64(value))
    }

    /// self - other, or `None` when other is larger
    pub fn checked_sub(&self, other: &BigNum) -> Option<BigNum> {
        if cmp_limbs(&self.limbs, &other.limbs) == Ordering::Less {
            return None;
        }
        let mut limbs = self.limbs.clone();
        sub_limbs_assign(&mut limbs, &other.limbs);
        Some(BigNum::from_limbs(limbs))
    }

    /// self - other for callers that already know `other <= self`
    ///
    /// # Panics
    ///
    /// When `other > self`.
    pub(crate) fn sub(&self, other: &BigNum) -> BigNum {
        match self.checked_sub(other) {
            Some(diff) => diff,
            None => panic!("attempt to subtract a larger big integer"),
        }
    }

    /// self - value
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `value > self`.
    pub fn sub_u64(&self, value: u64) -> Result<BigNum> {
        self.checked_sub(&BigNum::from_u64(value))
            .ok_or_else(|| Error::param("bignum", "subtraction would underflow"))
    }

    /// self * other
    pub fn mul(&self, other: &BigNum) -> BigNum {
        BigNum::from_limbs(mul_limbs(&self.limbs, &other.limbs))
    }

    pub fn mul_u64(&self, value: u64) -> BigNum {
        self.mul(&BigNum::from_u64(value))
    }

    /// self * 2^bits
    pub fn shl(&self, bits: usize) -> BigNum {
        if self.is_zero() {
            return BigNum::zero();
        }
        let limb_shift = bits / LIMB_BITS;
        let bit_shift = bits % LIMB_BITS;
        let mut out = vec![0u64; self.limbs.len() + limb_shift + 1];
        for (i, &limb) in self.limbs.iter().enumerate() {
            out[i + limb_shift] |= limb << bit_shift;
            if bit_shift != 0 {
                out[i + limb_shift + 1] |= limb >> (LIMB_BITS - bit_shift);
            }
        }
        BigNum::from_limbs(out)
    }

    /// self / 2^bits
    pub fn shr(&self, bits: usize) -> BigNum {
        let limb_shift = bits / LIMB_BITS;
        if limb_shift >= self.limbs.len() {
            return BigNum::zero();
        }
        let bit_shift = bits % LIMB_BITS;
        let len = self.limbs.len() - limb_shift;
        let mut out = vec![0u64; len];
        for (i, slot) in out.iter_mut().enumerate() {
            let lo = self.limbs[i + limb_shift] >> bit_shift;
            let hi = if bit_shift == 0 {
                0
            } else {
                self.limbs
                    .get(i + limb_shift + 1)
                    .map_or(0, |&h| h << (LIMB_BITS - bit_shift))
            };
            *slot = lo | hi;
        }
        BigNum::from_limbs(out)
    }

    fn shr1_assign(&mut self) {
        let mut carry = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let next = *limb << (LIMB_BITS - 1);
            *limb = (*limb >> 1) | carry;
            carry = next;
        }
        self.normalize();
    }

    /// Division with remainder: returns (quotient, remainder)
    pub fn div_rem(&self, divisor: &BigNum) -> Result<(BigNum, BigNum)> {
        if divisor.is_zero() {
            return Err(Error::param("big integer division", "division by zero"));
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    /// self mod modulus
    pub fn rem(&self, modulus: &BigNum) -> Result<BigNum> {
        self.div_rem(modulus).map(|(_, r)| r)
    }

    /// Shift-subtract division; `divisor` must be non-zero
    pub(crate) fn div_rem_nonzero(&self, divisor: &BigNum) -> (BigNum, BigNum) {
        if self < divisor {
            return (BigNum::zero(), self.clone());
        }
        if divisor.limbs.len() == 1 {
            let (q, r) = self.div_rem_limb(divisor.limbs[0]);
            return (q, BigNum::from_u64(r));
        }

        let shift = self.bits() - divisor.bits();
        let mut rem = self.clone();
        let mut d = divisor.shl(shift);
        let mut quotient = vec![0u64; shift / LIMB_BITS + 1];
        for i in (0..=shift).rev() {
            if rem >= d {
                sub_limbs_assign(&mut rem.limbs, &d.limbs);
                rem.normalize();
                quotient[i / LIMB_BITS] |= 1u64 << (i % LIMB_BITS);
            }
            d.shr1_assign();
        }
        (BigNum::from_limbs(quotient), rem)
    }

    /// Division by a single non-zero limb
    pub(crate) fn div_rem_limb(&self, divisor: u64) -> (BigNum, u64) {
        let mut quotient = vec![0u64; self.limbs.len()];
        let mut rem: DoubleLimb = 0;
        for i in (0..self.limbs.len()).rev() {
            let cur = (rem << LIMB_BITS) | self.limbs[i] as DoubleLimb;
            quotient[i] = (cur / divisor as DoubleLimb) as Limb;
            rem = cur % divisor as DoubleLimb;
        }
        (BigNum::from_limbs(quotient), rem as u64)
    }

    /// (self + other) mod modulus
    pub fn mod_add(&self, other: &BigNum, modulus: &BigNum) -> Result<BigNum> {
        self.add(other).rem(modulus)
    }

    /// (self - other) mod modulus
    pub fn mod_sub(&self, other: &BigNum, modulus: &BigNum) -> Result<BigNum> {
        let a = self.rem(modulus)?;
        let b = other.rem(modulus)?;
        Ok(sub_reduced(&a, &b, modulus))
    }

    /// (self * other) mod modulus
    pub fn mod_mul(&self, other: &BigNum, modulus: &BigNum) -> Result<BigNum> {
        self.mul(other).rem(modulus)
    }

    /// self^exp mod modulus
    ///
    /// Odd moduli go through Montgomery multiplication; even ones fall back
    /// to square-and-multiply with full reductions.
    pub fn mod_exp(&self, exp: &BigNum, modulus: &BigNum) -> Result<BigNum> {
        if modulus.is_zero() {
            return Err(Error::param("modular exponentiation", "zero modulus"));
        }
        if modulus.is_one() {
            return Ok(BigNum::zero());
        }
        if modulus.is_odd() {
            return Ok(MontgomeryCtx::new(modulus)?.exp(self, exp));
        }

        let base = self.div_rem_nonzero(modulus).1;
        let mut result = BigNum::one();
        for i in (0..exp.bits()).rev() {
            result = result.mul(&result).div_rem_nonzero(modulus).1;
            if exp.bit(i) {
                result = result.mul(&base).div_rem_nonzero(modulus).1;
            }
        }
        Ok(result)
    }

    /// Greatest common divisor
    pub fn gcd(&self, other: &BigNum) -> BigNum {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.div_rem_nonzero(&b).1;
            a = b;
            b = r;
        }
        a
    }

    /// Multiplicative inverse modulo `modulus`
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `gcd(self, modulus) != 1`.
    pub fn mod_inverse(&self, modulus: &BigNum) -> Result<BigNum> {
        if modulus.is_zero() || modulus.is_one() {
            return Err(Error::param("modular inverse", "modulus must exceed one"));
        }
        let mut r0 = modulus.clone();
        let mut r1 = self.div_rem_nonzero(modulus).1;
        // Bezout coefficients of `self`, kept reduced modulo `modulus`
        let mut t0 = BigNum::zero();
        let mut t1 = BigNum::one();
        while !r1.is_zero() {
            let (q, r2) = r0.div_rem_nonzero(&r1);
            let qt = q.mul(&t1).div_rem_nonzero(modulus).1;
            let t2 = sub_reduced(&t0, &qt, modulus);
            r0 = r1;
            r1 = r2;
            t0 = t1;
            t1 = t2;
        }
        if !r0.is_one() {
            return Err(Error::param("modular inverse", "value is not invertible"));
        }
        Ok(t0)
    }
}

/// a - b mod m for a, b already reduced
fn sub_reduced(a: &BigNum, b: &BigNum, m: &BigNum) -> BigNum {
    match a.checked_sub(b) {
        Some(diff) => diff,
        None => a.add(m).sub(b),
    }
}

pub(crate) fn add_limbs(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry: DoubleLimb = 0;
    for (i, &l) in long.iter().enumerate() {
        let s = l as DoubleLimb + short.get(i).copied().unwrap_or(0) as DoubleLimb + carry;
        out.push(s as Limb);
        carry = s >> LIMB_BITS;
    }
    if carry != 0 {
        out.push(carry as Limb);
    }
    out
}

/// a -= b in place; requires a >= b
pub(crate) fn sub_limbs_assign(a: &mut [Limb], b: &[Limb]) {
    let mut borrow = 0u64;
    for (i, limb) in a.iter_mut().enumerate() {
        let (d1, o1) = limb.overflowing_sub(b.get(i).copied().unwrap_or(0));
        let (d2, o2) = d1.overflowing_sub(borrow);
        *limb = d2;
        borrow = (o1 | o2) as u64;
    }
    debug_assert_eq!(borrow, 0, "big integer subtraction underflow");
}

pub(crate) fn mul_limbs(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry: DoubleLimb = 0;
        for (j, &y) in b.iter().enumerate() {
            let prod = x as DoubleLimb * y as DoubleLimb + out[i + j] as DoubleLimb + carry;
            out[i + j] = prod as Limb;
            carry = prod >> LIMB_BITS;
        }
        out[i + b.len()] = carry as Limb;
    }
    out
}
