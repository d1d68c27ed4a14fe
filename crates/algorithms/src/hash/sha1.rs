//! SHA-160 (SHA-1) as specified in FIPS 180-1

use super::{decode_words, encode_words, Engine, HashAlgorithm};
use crate::error::Result;
use byteorder::{BigEndian, ByteOrder};
use gcrypto_params::utils::hash::{MD_BLOCK_SIZE, SHA160_OUTPUT_SIZE};
use zeroize::Zeroize;

const IV: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

#[derive(Clone, Zeroize)]
pub struct Sha160Core {
    state: [u32; 5],
}

impl Default for Sha160Core {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl HashAlgorithm for Sha160Core {
    const ALGORITHM_ID: &'static str = "sha-160";
    const OUTPUT_SIZE: usize = SHA160_OUTPUT_SIZE;
    const BIG_ENDIAN: bool = true;
    const SELF_TEST: (&'static [u8], &'static str) =
        (b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");

    fn compress(&mut self, block: &[u8; MD_BLOCK_SIZE]) {
        let mut w = [0u32; 80];
        BigEndian::read_u32_into(block, &mut w[..16]);
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.state;
        for (t, &wt) in w.iter().enumerate() {
            let (f, k) = match t {
                0..=19 => ((b & c) | (!b & d), 0x5a827999),
                20..=39 => (b ^ c ^ d, 0x6ed9eba1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
                _ => (b ^ c ^ d, 0xca62c1d6),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(wt);
            (a, b, c, d, e) = (temp, a, b.rotate_left(30), c, d);
        }

        for (s, v) in self.state.iter_mut().zip([a, b, c, d, e]) {
            *s = s.wrapping_add(v);
        }
        w.zeroize();
    }

    fn chaining(&self) -> Vec<u8> {
        encode_words(&self.state, true)
    }

    fn load_chaining(&mut self, bytes: &[u8]) -> Result<()> {
        decode_words(bytes, &mut self.state, true)
    }
}

pub type Sha160 = Engine<Sha160Core>;
