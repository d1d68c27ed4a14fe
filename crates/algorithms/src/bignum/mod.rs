//! Arbitrary-precision unsigned integers
//!
//! The arithmetic DSS and RSA need: byte and hex conversion, ring
//! operations, division, Montgomery modular exponentiation, inverses,
//! probabilistic primality and uniform sampling.
//!
//! Values are unsigned; subtracting a larger value panics, mirroring the
//! behaviour of the primitive integer types.

mod montgomery;
mod ops;
mod prime;
mod random;

pub use montgomery::MontgomeryCtx;

use crate::error::{validate, Error, Result};
use core::cmp::Ordering;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Limb type for big number representation
pub type Limb = u64;
/// Double-width type for multiplication intermediates
pub(crate) type DoubleLimb = u128;

/// Bits per limb
pub const LIMB_BITS: usize = 64;

/// A heap-allocated unsigned integer that is zeroized on drop
///
/// Little-endian limbs with no trailing zero limb; zero has no limbs.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BigNum {
    limbs: Vec<Limb>,
}

impl BigNum {
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn one() -> Self {
        Self::from_u64(1)
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_limbs(vec![value])
    }

    pub(crate) fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut bn = Self { limbs };
        bn.normalize();
        bn
    }

    /// Parse an unsigned big-endian magnitude
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut limbs = vec![0u64; bytes.len().div_ceil(8)];
        for (i, &byte) in bytes.iter().rev().enumerate() {
            limbs[i / 8] |= (byte as u64) << ((i % 8) * 8);
        }
        Self::from_limbs(limbs)
    }

    /// Minimal big-endian magnitude; empty for zero
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let len = self.bits().div_ceil(8);
        let mut out = vec![0u8; len];
        for i in 0..len {
            out[len - 1 - i] = (self.limbs[i / 8] >> ((i % 8) * 8)) as u8;
        }
        out
    }

    /// Big-endian magnitude left-padded with zeroes to exactly `len` bytes
    pub fn to_bytes_be_padded(&self, len: usize) -> Result<Vec<u8>> {
        let bytes = self.to_bytes_be();
        validate::max_length("big integer encoding", bytes.len(), len)?;
        let mut out = vec![0u8; len - bytes.len()];
        out.extend_from_slice(&bytes);
        Ok(out)
    }

    /// Parse hexadecimal digits, with or without a `0x` prefix
    pub fn from_hex(digits: &str) -> Result<Self> {
        let digits = digits.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        let even = if digits.len() % 2 == 1 {
            format!("0{}", digits)
        } else {
            digits.to_string()
        };
        let bytes =
            hex::decode(even).map_err(|e| Error::param("big integer hex", e.to_string()))?;
        Ok(Self::from_bytes_be(&bytes))
    }

    /// Lowercase hexadecimal digits without leading zeroes
    pub fn to_hex(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        hex::encode(self.to_bytes_be())
            .trim_start_matches('0')
            .to_string()
    }

    /// Number of significant bits
    pub fn bits(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                (self.limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
            }
        }
    }

    pub fn bit(&self, idx: usize) -> bool {
        self.limbs
            .get(idx / LIMB_BITS)
            .map_or(false, |limb| (limb >> (idx % LIMB_BITS)) & 1 == 1)
    }

    pub fn set_bit(&mut self, idx: usize) {
        let limb = idx / LIMB_BITS;
        if limb >= self.limbs.len() {
            self.limbs.resize(limb + 1, 0);
        }
        self.limbs[limb] |= 1u64 << (idx % LIMB_BITS);
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    pub fn is_odd(&self) -> bool {
        self.low_u64() & 1 == 1
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Least significant limb
    pub fn low_u64(&self) -> u64 {
        self.limbs.first().copied().unwrap_or(0)
    }

    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of trailing zero bits; zero for zero
    pub fn trailing_zeros(&self) -> usize {
        for (i, &limb) in self.limbs.iter().enumerate() {
            if limb != 0 {
                return i * LIMB_BITS + limb.trailing_zeros() as usize;
            }
        }
        0
    }

    pub(crate) fn normalize(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
    }
}

impl From<u64> for BigNum {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_limbs(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum(0x{})", self.to_hex())
    }
}

impl fmt::LowerHex for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compare two normalized limb slices
pub(crate) fn cmp_limbs(a: &[Limb], b: &[Limb]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}
