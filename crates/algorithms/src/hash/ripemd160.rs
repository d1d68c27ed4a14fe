//! RIPEMD-160
//!
//! The word-selection and rotation tables here are shared with RIPEMD-128,
//! which runs the first four of the five rounds.

use super::{decode_words, encode_words, Engine, HashAlgorithm};
use crate::error::Result;
use byteorder::{ByteOrder, LittleEndian};
use gcrypto_params::utils::hash::{MD_BLOCK_SIZE, RIPEMD160_OUTPUT_SIZE};
use zeroize::Zeroize;

const IV: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Message word order, left line
pub(super) const R_LEFT: [[usize; 16]; 5] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8],
    [3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12],
    [1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2],
    [4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13],
];

/// Message word order, right line
pub(super) const R_RIGHT: [[usize; 16]; 5] = [
    [5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12],
    [6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2],
    [15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13],
    [8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14],
    [12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11],
];

/// Rotation amounts, left line
pub(super) const S_LEFT: [[u32; 16]; 5] = [
    [11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8],
    [7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12],
    [11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5],
    [11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12],
    [9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6],
];

/// Rotation amounts, right line
pub(super) const S_RIGHT: [[u32; 16]; 5] = [
    [8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6],
    [9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11],
    [9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5],
    [15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8],
    [8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11],
];

/// Additive constants of the left line
pub(super) const K_LEFT: [u32; 5] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];

const K_RIGHT: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000];

/// Boolean function of round `j`
#[inline(always)]
pub(super) fn f(j: usize, x: u32, y: u32, z: u32) -> u32 {
    match j {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

#[derive(Clone, Zeroize)]
pub struct Ripemd160Core {
    state: [u32; 5],
}

impl Default for Ripemd160Core {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl HashAlgorithm for Ripemd160Core {
    const ALGORITHM_ID: &'static str = "ripemd160";
    const OUTPUT_SIZE: usize = RIPEMD160_OUTPUT_SIZE;
    const BIG_ENDIAN: bool = false;
    const SELF_TEST: (&'static [u8], &'static str) =
        (b"abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");

    fn compress(&mut self, block: &[u8; MD_BLOCK_SIZE]) {
        let mut x = [0u32; 16];
        LittleEndian::read_u32_into(block, &mut x);
        let [mut al, mut bl, mut cl, mut dl, mut el] = self.state;
        let [mut ar, mut br, mut cr, mut dr, mut er] = self.state;

        for j in 0..5 {
            for i in 0..16 {
                let t = al
                    .wrapping_add(f(j, bl, cl, dl))
                    .wrapping_add(x[R_LEFT[j][i]])
                    .wrapping_add(K_LEFT[j])
                    .rotate_left(S_LEFT[j][i])
                    .wrapping_add(el);
                (al, bl, cl, dl, el) = (el, t, bl, cl.rotate_left(10), dl);

                let t = ar
                    .wrapping_add(f(4 - j, br, cr, dr))
                    .wrapping_add(x[R_RIGHT[j][i]])
                    .wrapping_add(K_RIGHT[j])
                    .rotate_left(S_RIGHT[j][i])
                    .wrapping_add(er);
                (ar, br, cr, dr, er) = (er, t, br, cr.rotate_left(10), dr);
            }
        }

        let h = self.state;
        self.state = [
            h[1].wrapping_add(cl).wrapping_add(dr),
            h[2].wrapping_add(dl).wrapping_add(er),
            h[3].wrapping_add(el).wrapping_add(ar),
            h[4].wrapping_add(al).wrapping_add(br),
            h[0].wrapping_add(bl).wrapping_add(cr),
        ];
        x.zeroize();
    }

    fn chaining(&self) -> Vec<u8> {
        encode_words(&self.state, false)
    }

    fn load_chaining(&mut self, bytes: &[u8]) -> Result<()> {
        decode_words(bytes, &mut self.state, false)
    }
}

pub type Ripemd160 = Engine<Ripemd160Core>;
