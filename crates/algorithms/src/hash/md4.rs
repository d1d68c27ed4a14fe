//! MD4 message digest (RFC 1320)
//!
//! Broken for collision resistance; provided for interoperability only.

use super::{decode_words, encode_words, Engine, HashAlgorithm};
use crate::error::Result;
use byteorder::{ByteOrder, LittleEndian};
use gcrypto_params::utils::hash::{MD4_OUTPUT_SIZE, MD_BLOCK_SIZE};
use zeroize::Zeroize;

const IV: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

const ROUND2_ORDER: [usize; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];
const ROUND3_ORDER: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

#[derive(Clone, Zeroize)]
pub struct Md4Core {
    state: [u32; 4],
}

impl Default for Md4Core {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl HashAlgorithm for Md4Core {
    const ALGORITHM_ID: &'static str = "md4";
    const OUTPUT_SIZE: usize = MD4_OUTPUT_SIZE;
    const BIG_ENDIAN: bool = false;
    const SELF_TEST: (&'static [u8], &'static str) = (b"", "31d6cfe0d16ae931b73c59d7e0c089c0");

    fn compress(&mut self, block: &[u8; MD_BLOCK_SIZE]) {
        let mut x = [0u32; 16];
        LittleEndian::read_u32_into(block, &mut x);
        let [mut a, mut b, mut c, mut d] = self.state;

        for i in 0..16 {
            let f = (b & c) | (!b & d);
            let t = a.wrapping_add(f).wrapping_add(x[i]).rotate_left([3, 7, 11, 19][i % 4]);
            (a, b, c, d) = (d, t, b, c);
        }
        for (i, &k) in ROUND2_ORDER.iter().enumerate() {
            let g = (b & c) | (b & d) | (c & d);
            let t = a
                .wrapping_add(g)
                .wrapping_add(x[k])
                .wrapping_add(0x5a827999)
                .rotate_left([3, 5, 9, 13][i % 4]);
            (a, b, c, d) = (d, t, b, c);
        }
        for (i, &k) in ROUND3_ORDER.iter().enumerate() {
            let h = b ^ c ^ d;
            let t = a
                .wrapping_add(h)
                .wrapping_add(x[k])
                .wrapping_add(0x6ed9eba1)
                .rotate_left([3, 9, 11, 15][i % 4]);
            (a, b, c, d) = (d, t, b, c);
        }

        for (s, v) in self.state.iter_mut().zip([a, b, c, d]) {
            *s = s.wrapping_add(v);
        }
        x.zeroize();
    }

    fn chaining(&self) -> Vec<u8> {
        encode_words(&self.state, false)
    }

    fn load_chaining(&mut self, bytes: &[u8]) -> Result<()> {
        decode_words(bytes, &mut self.state, false)
    }
}

pub type Md4 = Engine<Md4Core>;
