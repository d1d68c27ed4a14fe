//! MD5 message digest (RFC 1321)

use super::{decode_words, encode_words, Engine, HashAlgorithm};
use crate::error::Result;
use byteorder::{ByteOrder, LittleEndian};
use gcrypto_params::utils::hash::{MD5_OUTPUT_SIZE, MD_BLOCK_SIZE};
use zeroize::Zeroize;

const IV: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// floor(|sin(i + 1)| * 2^32)
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Rotation amounts, four per round
const SHIFTS: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

#[derive(Clone, Zeroize)]
pub struct Md5Core {
    state: [u32; 4],
}

impl Default for Md5Core {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl HashAlgorithm for Md5Core {
    const ALGORITHM_ID: &'static str = "md5";
    const OUTPUT_SIZE: usize = MD5_OUTPUT_SIZE;
    const BIG_ENDIAN: bool = false;
    const SELF_TEST: (&'static [u8], &'static str) = (b"abc", "900150983cd24fb0d6963f7d28e17f72");

    fn compress(&mut self, block: &[u8; MD_BLOCK_SIZE]) {
        let mut x = [0u32; 16];
        LittleEndian::read_u32_into(block, &mut x);
        let [mut a, mut b, mut c, mut d] = self.state;

        for i in 0..64 {
            let round = i / 16;
            let (f, g) = match round {
                0 => ((b & c) | (!b & d), i),
                1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };
            let t = a
                .wrapping_add(f)
                .wrapping_add(K[i])
                .wrapping_add(x[g])
                .rotate_left(SHIFTS[round][i % 4]);
            (a, b, c, d) = (d, b.wrapping_add(t), b, c);
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

pub type Md5 = Engine<Md5Core>;
