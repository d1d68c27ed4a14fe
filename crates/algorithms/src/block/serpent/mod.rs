//! Serpent, the 32-round substitution-permutation network
//!
//! Blocks and keys are read as big-endian integers, so the last four bytes
//! form word 0. Keys shorter than 256 bits are extended with a single one
//! bit above their most significant byte.
//!
//! ## Constant-Time Guarantees
//!
//! The S-boxes are evaluated on the bitsliced words as a sum of minterms.
//! Table entries only select which minterms are combined, so no table is
//! indexed by key or data.

use super::{check_span, symmetry_test};
use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder};
use gcrypto_api::{BlockCipher, CipherConfig};
use gcrypto_params::utils::symmetric::{SERPENT_BLOCK_SIZE, SERPENT_KEY_SIZES, SERPENT_ROUNDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fractional part of the golden ratio
const PHI: u32 = 0x9e37_79b9;

const SBOX: [[u8; 16]; 8] = [
    [3, 8, 15, 1, 10, 6, 5, 11, 14, 13, 4, 2, 7, 0, 9, 12],
    [15, 12, 2, 7, 9, 0, 5, 10, 1, 11, 14, 8, 6, 13, 3, 4],
    [8, 6, 7, 9, 3, 12, 10, 15, 13, 1, 14, 4, 0, 11, 5, 2],
    [0, 15, 11, 8, 12, 9, 6, 3, 13, 1, 2, 4, 10, 7, 5, 14],
    [1, 15, 8, 3, 12, 0, 11, 6, 2, 5, 4, 10, 9, 14, 7, 13],
    [15, 5, 2, 11, 4, 10, 9, 12, 0, 3, 14, 8, 13, 6, 7, 1],
    [7, 2, 12, 5, 8, 4, 6, 11, 14, 9, 1, 15, 13, 3, 10, 0],
    [1, 13, 15, 0, 14, 8, 2, 11, 7, 4, 12, 10, 9, 3, 5, 6],
];

const SBOX_INV: [[u8; 16]; 8] = [
    [13, 3, 11, 0, 10, 6, 5, 12, 1, 14, 4, 7, 15, 9, 8, 2],
    [5, 8, 2, 14, 15, 6, 12, 3, 11, 4, 7, 9, 1, 13, 10, 0],
    [12, 9, 15, 4, 11, 14, 1, 2, 0, 3, 6, 13, 5, 8, 10, 7],
    [0, 9, 10, 7, 11, 14, 6, 13, 3, 5, 12, 2, 4, 8, 15, 1],
    [5, 0, 8, 3, 10, 9, 7, 14, 2, 12, 11, 6, 4, 15, 13, 1],
    [8, 15, 2, 9, 4, 1, 13, 14, 11, 6, 5, 3, 7, 12, 10, 0],
    [15, 10, 1, 13, 5, 3, 6, 0, 4, 9, 14, 7, 2, 12, 8, 11],
    [3, 0, 6, 13, 9, 14, 15, 8, 5, 12, 11, 7, 10, 1, 4, 2],
];

/// Four 32-bit words; bit `b` of word `i` is bit `i` of nibble `b`
type Words = [u32; 4];

/// Apply a 4-bit S-box to all 32 nibble positions at once
fn substitute(table: &[u8; 16], x: &Words) -> Words {
    let mut out = [0u32; 4];
    for (n, &v) in table.iter().enumerate() {
        let mut minterm = !0u32;
        for (i, &w) in x.iter().enumerate() {
            minterm &= if (n >> i) & 1 == 1 { w } else { !w };
        }
        for (j, o) in out.iter_mut().enumerate() {
            if (v >> j) & 1 == 1 {
                *o |= minterm;
            }
        }
    }
    out
}

fn linear(x: &mut Words) {
    x[0] = x[0].rotate_left(13);
    x[2] = x[2].rotate_left(3);
    x[1] ^= x[0] ^ x[2];
    x[3] ^= x[2] ^ (x[0] << 3);
    x[1] = x[1].rotate_left(1);
    x[3] = x[3].rotate_left(7);
    x[0] ^= x[1] ^ x[3];
    x[2] ^= x[3] ^ (x[1] << 7);
    x[0] = x[0].rotate_left(5);
    x[2] = x[2].rotate_left(22);
}

fn linear_inv(x: &mut Words) {
    x[2] = x[2].rotate_right(22);
    x[0] = x[0].rotate_right(5);
    x[2] ^= x[3] ^ (x[1] << 7);
    x[0] ^= x[1] ^ x[3];
    x[3] = x[3].rotate_right(7);
    x[1] = x[1].rotate_right(1);
    x[3] ^= x[2] ^ (x[0] << 3);
    x[1] ^= x[0] ^ x[2];
    x[2] = x[2].rotate_right(3);
    x[0] = x[0].rotate_right(13);
}

#[inline(always)]
fn mix_key(x: &mut Words, key: &Words) {
    for (w, k) in x.iter_mut().zip(key) {
        *w ^= k;
    }
}

fn load(block: &[u8]) -> Words {
    let mut x = [0u32; 4];
    for (w, chunk) in x.iter_mut().zip(block.rchunks_exact(4)) {
        *w = BigEndian::read_u32(chunk);
    }
    x
}

fn store(x: &Words, block: &mut [u8]) {
    for (w, chunk) in x.iter().zip(block.rchunks_exact_mut(4)) {
        BigEndian::write_u32(chunk, *w);
    }
}

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeySchedule {
    /// 33 round keys
    subkeys: Vec<Words>,
}

impl KeySchedule {
    fn expand(key: &[u8]) -> Result<Self> {
        if !SERPENT_KEY_SIZES.contains(&key.len()) {
            return Err(Error::key(
                "serpent",
                format!("unsupported key length {}", key.len()),
            ));
        }
        // eight key words followed by the 132 prekeys
        let mut words = vec![0u32; 8 + 4 * (SERPENT_ROUNDS + 1)];
        for (w, chunk) in words.iter_mut().zip(key.rchunks_exact(4)) {
            *w = BigEndian::read_u32(chunk);
        }
        let given = key.len() / 4;
        if given < 8 {
            words[given] = 1;
        }
        for i in 8..words.len() {
            let t = words[i - 8] ^ words[i - 5] ^ words[i - 3] ^ words[i - 1];
            words[i] = (t ^ PHI ^ (i - 8) as u32).rotate_left(11);
        }

        let subkeys = words[8..]
            .chunks_exact(4)
            .enumerate()
            .map(|(i, c)| substitute(&SBOX[(11 - i % 8) % 8], &[c[0], c[1], c[2], c[3]]))
            .collect();
        words.zeroize();
        Ok(Self { subkeys })
    }

    fn encrypt(&self, x: &mut Words) {
        for round in 0..SERPENT_ROUNDS {
            mix_key(x, &self.subkeys[round]);
            *x = substitute(&SBOX[round % 8], x);
            if round + 1 < SERPENT_ROUNDS {
                linear(x);
            }
        }
        mix_key(x, &self.subkeys[SERPENT_ROUNDS]);
    }

    fn decrypt(&self, x: &mut Words) {
        mix_key(x, &self.subkeys[SERPENT_ROUNDS]);
        for round in (0..SERPENT_ROUNDS).rev() {
            if round + 1 < SERPENT_ROUNDS {
                linear_inv(x);
            }
            *x = substitute(&SBOX_INV[round % 8], x);
            mix_key(x, &self.subkeys[round]);
        }
    }
}

/// Variable-key answer for a 192-bit key with only bit 8 set and an
/// all-zero plaintext
const KNOWN_ANSWER: [u8; 16] = [
    0x55, 0x87, 0xb5, 0xbc, 0xb9, 0xee, 0x5a, 0x28, 0xba, 0x2b, 0xac, 0xc4, 0x18, 0x00, 0x52, 0x40,
];

/// The Serpent block cipher
#[derive(Clone, Default)]
pub struct Serpent {
    schedule: Option<KeySchedule>,
}

impl Serpent {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule(&self) -> Result<&KeySchedule> {
        self.schedule
            .as_ref()
            .ok_or_else(|| Error::state("serpent", "cipher is not keyed"))
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
        check_span("serpent input block", input.len(), in_off, SERPENT_BLOCK_SIZE)?;
        check_span("serpent output block", out.len(), out_off, SERPENT_BLOCK_SIZE)?;

        let mut x = load(&input[in_off..in_off + SERPENT_BLOCK_SIZE]);
        if forward {
            schedule.encrypt(&mut x);
        } else {
            schedule.decrypt(&mut x);
        }
        store(&x, &mut out[out_off..out_off + SERPENT_BLOCK_SIZE]);
        x.zeroize();
        Ok(())
    }

    fn known_answer() -> bool {
        let mut key = [0u8; 24];
        key[1] = 0x80;
        let pt = [0u8; 16];
        let mut ct = [0u8; 16];
        let mut back = [0u8; 16];
        let mut serpent = Serpent::new();
        serpent.init(&CipherConfig::new().with_key(&key)).is_ok()
            && serpent.encrypt_block(&pt, 0, &mut ct, 0).is_ok()
            && serpent.decrypt_block(&ct, 0, &mut back, 0).is_ok()
            && ct == KNOWN_ANSWER
            && back == pt
    }
}

impl BlockCipher for Serpent {
    fn name(&self) -> &'static str {
        "serpent"
    }

    fn default_block_size(&self) -> usize {
        SERPENT_BLOCK_SIZE
    }

    fn default_key_size(&self) -> usize {
        SERPENT_KEY_SIZES[0]
    }

    fn block_sizes(&self) -> Vec<usize> {
        vec![SERPENT_BLOCK_SIZE]
    }

    fn key_sizes(&self) -> Vec<usize> {
        SERPENT_KEY_SIZES.to_vec()
    }

    fn init(&mut self, config: &CipherConfig) -> Result<()> {
        if self.schedule.is_some() {
            return Err(Error::state("serpent", "cipher is already keyed"));
        }
        let block_size = config.block_size.unwrap_or(SERPENT_BLOCK_SIZE);
        if block_size != SERPENT_BLOCK_SIZE {
            return Err(Error::param(
                "serpent",
                format!("unsupported block size {}", block_size),
            ));
        }
        let key = config
            .key
            .as_ref()
            .ok_or_else(|| Error::key("serpent", "no key material"))?;
        self.schedule = Some(KeySchedule::expand(key)?);
        Ok(())
    }

    fn current_block_size(&self) -> Result<usize> {
        self.schedule().map(|_| SERPENT_BLOCK_SIZE)
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
        symmetry_test(Serpent::new) && Self::known_answer()
    }
}
