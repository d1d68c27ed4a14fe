//! AES (Rijndael with a 128-bit block) as specified in FIPS 197
//!
//! One type covers the 128, 192 and 256-bit key schedules; the key length
//! given to `init` selects the round count.
//!
//! ## Constant-Time Guarantees
//!
//! The S-box is computed by inversion in GF(2^8) followed by the affine
//! map, so no secret-indexed table lookups take place. GF(2^8) products
//! use branchless masking.

use super::{check_span, symmetry_test};
use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder};
use gcrypto_api::{BlockCipher, CipherConfig};
use gcrypto_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};
use std::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000,
    0x10000000, 0x20000000, 0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// b⁻¹ in GF(2⁸) as b^254, zero for zero
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// AES inverse S-box: undo the affine map, then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    // A⁻¹ is convolution by t¹ + t³ + t⁶ mod (t⁸+1)
    let u = y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6);
    gf_inv(u)
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let mut bytes = [0u8; 4];
    BigEndian::write_u32(&mut bytes, word);
    for b in bytes.iter_mut() {
        *b = sbox(*b);
    }
    BigEndian::read_u32(&bytes)
}

#[inline(always)]
fn mul2(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * 0x1B)
}

#[inline(always)]
fn mul9(b: u8) -> u8 {
    mul2(mul2(mul2(b))) ^ b
}

#[inline(always)]
fn mul11(b: u8) -> u8 {
    mul2(mul2(mul2(b))) ^ mul2(b) ^ b
}

#[inline(always)]
fn mul13(b: u8) -> u8 {
    mul2(mul2(mul2(b))) ^ mul2(mul2(b)) ^ b
}

#[inline(always)]
fn mul14(b: u8) -> u8 {
    mul2(mul2(mul2(b))) ^ mul2(mul2(b)) ^ mul2(b)
}

fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Row r of the column-major state rotates left by r columns
fn shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[c * 4 + r] = t[((c + r) % 4) * 4 + r];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[((c + r) % 4) * 4 + r] = t[c * 4 + r];
        }
    }
}

fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
        col[0] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        col[1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        col[2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        col[3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
        col[0] = mul14(s0) ^ mul11(s1) ^ mul13(s2) ^ mul9(s3);
        col[1] = mul9(s0) ^ mul14(s1) ^ mul11(s2) ^ mul13(s3);
        col[2] = mul13(s0) ^ mul9(s1) ^ mul14(s2) ^ mul11(s3);
        col[3] = mul11(s0) ^ mul13(s1) ^ mul9(s2) ^ mul14(s3);
    }
}

fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

/// Expanded key schedule, 16 bytes per round key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeySchedule {
    round_keys: Vec<u8>,
    rounds: usize,
}

impl KeySchedule {
    fn expand(key: &[u8]) -> Result<Self> {
        if ![AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE].contains(&key.len()) {
            return Err(Error::key(
                "aes",
                format!("unsupported key length {}", key.len()),
            ));
        }
        let nk = key.len() / 4;
        let rounds = nk + 6;
        let total = 4 * (rounds + 1);

        let mut words = vec![0u32; total];
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = BigEndian::read_u32(chunk);
        }
        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        let mut round_keys = vec![0u8; total * 4];
        for (chunk, &w) in round_keys.chunks_exact_mut(4).zip(words.iter()) {
            BigEndian::write_u32(chunk, w);
        }
        words.zeroize();
        Ok(Self { round_keys, rounds })
    }

    fn round_key(&self, round: usize) -> &[u8] {
        &self.round_keys[round * 16..(round + 1) * 16]
    }

    fn encrypt(&self, state: &mut [u8; 16]) {
        add_round_key(state, self.round_key(0));
        for round in 1..self.rounds {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, self.round_key(round));
        }
        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, self.round_key(self.rounds));
    }

    fn decrypt(&self, state: &mut [u8; 16]) {
        add_round_key(state, self.round_key(self.rounds));
        for round in (1..self.rounds).rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, self.round_key(round));
            inv_mix_columns(state);
        }
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, self.round_key(0));
    }
}

/// FIPS 197 appendix C: key 00 01 .. (len - 1), plaintext 00 11 22 .. ff
const KNOWN_ANSWERS: [(usize, [u8; 16]); 3] = [
    (
        16,
        [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30,
            0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a,
        ],
    ),
    (
        24,
        [
            0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0,
            0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d, 0x71, 0x91,
        ],
    ),
    (
        32,
        [
            0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf,
            0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60, 0x89,
        ],
    ),
];

/// The AES block cipher
#[derive(Clone, Default)]
pub struct Aes {
    schedule: Option<KeySchedule>,
}

impl Aes {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule(&self) -> Result<&KeySchedule> {
        self.schedule
            .as_ref()
            .ok_or_else(|| Error::state("aes", "cipher is not keyed"))
    }

    fn transform(
        &self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
        forward: bool,
    ) -> Result<()> {
        let schedule = self.schedule()?;
        check_span("aes input block", input.len(), in_off, AES_BLOCK_SIZE)?;
        check_span("aes output block", out.len(), out_off, AES_BLOCK_SIZE)?;

        let mut state = [0u8; 16];
        state.copy_from_slice(&input[in_off..in_off + AES_BLOCK_SIZE]);
        if forward {
            schedule.encrypt(&mut state);
        } else {
            schedule.decrypt(&mut state);
        }
        out[out_off..out_off + AES_BLOCK_SIZE].copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn known_answers() -> bool {
        let pt: Vec<u8> = (0..16u8).map(|i| i * 0x11).collect();
        KNOWN_ANSWERS.iter().all(|(ks, expected)| {
            let key: Vec<u8> = (0..*ks as u8).collect();
            let mut aes = Aes::new();
            let mut ct = [0u8; 16];
            aes.init(&CipherConfig::new().with_key(&key)).is_ok()
                && aes.encrypt_block(&pt, 0, &mut ct, 0).is_ok()
                && &ct == expected
        })
    }
}

impl BlockCipher for Aes {
    fn name(&self) -> &'static str {
        "aes"
    }

    fn default_block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn default_key_size(&self) -> usize {
        AES128_KEY_SIZE
    }

    fn block_sizes(&self) -> Vec<usize> {
        vec![AES_BLOCK_SIZE]
    }

    fn key_sizes(&self) -> Vec<usize> {
        vec![AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE]
    }

    fn init(&mut self, config: &CipherConfig) -> Result<()> {
        if self.schedule.is_some() {
            return Err(Error::state("aes", "cipher is already keyed"));
        }
        let block_size = config.block_size.unwrap_or(AES_BLOCK_SIZE);
        if block_size != AES_BLOCK_SIZE {
            return Err(Error::param(
                "aes",
                format!("unsupported block size {}", block_size),
            ));
        }
        let key = config
            .key
            .as_ref()
            .ok_or_else(|| Error::key("aes", "no key material"))?;
        self.schedule = Some(KeySchedule::expand(key)?);
        Ok(())
    }

    fn current_block_size(&self) -> Result<usize> {
        self.schedule().map(|_| AES_BLOCK_SIZE)
    }

    fn encrypt_block(
        &self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
    ) -> Result<()> {
        self.transform(input, in_off, out, out_off, true)
    }

    fn decrypt_block(
        &self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
    ) -> Result<()> {
        self.transform(input, in_off, out, out_off, false)
    }

    fn reset(&mut self) {
        self.schedule = None;
    }

    fn self_test(&self) -> bool {
        symmetry_test(Aes::new) && Self::known_answers()
    }
}

#[cfg(test)]
mod tests;
