//! Whirlpool-T
//!
//! The 2001 revision of Whirlpool: the S-box is built from the E and R
//! mini-boxes and the diffusion matrix is circ(1, 1, 3, 1, 5, 8, 9, 5).
//! State rows are big-endian 64-bit words so one round is eight table
//! lookups and rotations per row.

use super::{Engine, HashAlgorithm};
use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder};
use gcrypto_params::utils::hash::{
    MD_BLOCK_SIZE, WHIRLPOOL_LENGTH_FIELD, WHIRLPOOL_OUTPUT_SIZE, WHIRLPOOL_ROUNDS,
};
use zeroize::Zeroize;

const MINI_E: [u8; 16] = [
    0x1, 0xb, 0x9, 0xc, 0xd, 0x6, 0xf, 0x3, 0xe, 0x8, 0x7, 0x4, 0xa, 0x2, 0x5, 0x0,
];
const MINI_R: [u8; 16] = [
    0x7, 0xc, 0xb, 0xd, 0xe, 0x4, 0x9, 0xf, 0x6, 0x3, 0x8, 0xa, 0x2, 0x5, 0x1, 0x0,
];

/// First row of the diffusion matrix
const CIRCULANT: [u8; 8] = [1, 1, 3, 1, 5, 8, 9, 5];

/// Reduction polynomial x^8 + x^4 + x^3 + x^2 + 1
const REDUCTION: u16 = 0x11d;

const fn mini_e_inverse() -> [u8; 16] {
    let mut inv = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        inv[MINI_E[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

const fn build_sbox() -> [u8; 256] {
    let e_inv = mini_e_inverse();
    let mut sbox = [0u8; 256];
    let mut u = 0;
    while u < 256 {
        let a = MINI_E[u >> 4];
        let b = e_inv[u & 0x0f];
        let r = MINI_R[(a ^ b) as usize];
        sbox[u] = (MINI_E[(a ^ r) as usize] << 4) | e_inv[(b ^ r) as usize];
        u += 1;
    }
    sbox
}

const fn gf_mul(a: u8, mut b: u8) -> u8 {
    let mut a = a as u16;
    let mut p: u16 = 0;
    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    p as u8
}

/// `T0[x]` is the row S[x]·C packed big-endian; the other seven tables
/// are byte rotations of it
const fn build_table() -> [u64; 256] {
    let mut table = [0u64; 256];
    let mut x = 0;
    while x < 256 {
        let mut v = 0u64;
        let mut j = 0;
        while j < 8 {
            v = (v << 8) | gf_mul(SBOX[x], CIRCULANT[j]) as u64;
            j += 1;
        }
        table[x] = v;
        x += 1;
    }
    table
}

const fn build_round_constants() -> [u64; WHIRLPOOL_ROUNDS] {
    let mut rc = [0u64; WHIRLPOOL_ROUNDS];
    let mut r = 0;
    while r < WHIRLPOOL_ROUNDS {
        let mut v = 0u64;
        let mut j = 0;
        while j < 8 {
            v = (v << 8) | SBOX[8 * r + j] as u64;
            j += 1;
        }
        rc[r] = v;
        r += 1;
    }
    rc
}

const SBOX: [u8; 256] = build_sbox();
const T0: [u64; 256] = build_table();
const ROUND_CONSTANTS: [u64; WHIRLPOOL_ROUNDS] = build_round_constants();

/// SubBytes, ShiftColumns and MixRows in one pass
#[inline(always)]
fn rho(rows: &[u64; 8]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for (i, slot) in out.iter_mut().enumerate() {
        let mut acc = 0u64;
        for k in 0..8 {
            let byte = (rows[(i + 8 - k) & 7] >> (56 - 8 * k)) as u8;
            acc ^= T0[byte as usize].rotate_right(8 * k as u32);
        }
        *slot = acc;
    }
    out
}

#[derive(Clone, Default, Zeroize)]
pub struct WhirlpoolCore {
    state: [u64; 8],
}

impl HashAlgorithm for WhirlpoolCore {
    const ALGORITHM_ID: &'static str = "whirlpool";
    const OUTPUT_SIZE: usize = WHIRLPOOL_OUTPUT_SIZE;
    const LENGTH_FIELD: usize = WHIRLPOOL_LENGTH_FIELD;
    const BIG_ENDIAN: bool = true;
    const SELF_TEST: (&'static [u8], &'static str) = (
        b"",
        "470f0409abaa446e49667d4ebe12a14387cedbd10dd17b8243cad550a089dc0f\
         eea7aa40f6c2aaab71c6ebd076e43c7cfca0ad32567897dcb5969861049a0f5a",
    );

    fn compress(&mut self, block: &[u8; MD_BLOCK_SIZE]) {
        let mut m = [0u64; 8];
        BigEndian::read_u64_into(block, &mut m);

        let mut key = self.state;
        let mut state = [0u64; 8];
        for i in 0..8 {
            state[i] = m[i] ^ key[i];
        }
        for rc in ROUND_CONSTANTS {
            key = rho(&key);
            key[0] ^= rc;
            state = rho(&state);
            for i in 0..8 {
                state[i] ^= key[i];
            }
        }
        for i in 0..8 {
            self.state[i] ^= state[i] ^ m[i];
        }

        m.zeroize();
        key.zeroize();
        state.zeroize();
    }

    fn chaining(&self) -> Vec<u8> {
        let mut out = vec![0u8; WHIRLPOOL_OUTPUT_SIZE];
        BigEndian::write_u64_into(&self.state, &mut out);
        out
    }

    fn load_chaining(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != WHIRLPOOL_OUTPUT_SIZE {
            return Err(Error::InvalidLength {
                context: "hash chaining value",
                expected: WHIRLPOOL_OUTPUT_SIZE,
                actual: bytes.len(),
            });
        }
        BigEndian::read_u64_into(bytes, &mut self.state);
        Ok(())
    }
}

pub type Whirlpool = Engine<WhirlpoolCore>;
