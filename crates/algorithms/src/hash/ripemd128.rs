//! RIPEMD-128

use super::ripemd160::{f, K_LEFT, R_LEFT, R_RIGHT, S_LEFT, S_RIGHT};
use super::{decode_words, encode_words, Engine, HashAlgorithm};
use crate::error::Result;
use byteorder::{ByteOrder, LittleEndian};
use gcrypto_params::utils::hash::{MD_BLOCK_SIZE, RIPEMD128_OUTPUT_SIZE};
use zeroize::Zeroize;

const IV: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

const K_RIGHT: [u32; 4] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x00000000];

#[derive(Clone, Zeroize)]
pub struct Ripemd128Core {
    state: [u32; 4],
}

impl Default for Ripemd128Core {
    fn default() -> Self {
        Self { state: IV }
    }
}

impl HashAlgorithm for Ripemd128Core {
    const ALGORITHM_ID: &'static str = "ripemd128";
    const OUTPUT_SIZE: usize = RIPEMD128_OUTPUT_SIZE;
    const BIG_ENDIAN: bool = false;
    const SELF_TEST: (&'static [u8], &'static str) = (b"abc", "c14a12199c66e4ba84636b0f69144c77");

    fn compress(&mut self, block: &[u8; MD_BLOCK_SIZE]) {
        let mut x = [0u32; 16];
        LittleEndian::read_u32_into(block, &mut x);
        let [mut al, mut bl, mut cl, mut dl] = self.state;
        let [mut ar, mut br, mut cr, mut dr] = self.state;

        for j in 0..4 {
            for i in 0..16 {
                let t = al
                    .wrapping_add(f(j, bl, cl, dl))
                    .wrapping_add(x[R_LEFT[j][i]])
                    .wrapping_add(K_LEFT[j])
                    .rotate_left(S_LEFT[j][i]);
                (al, bl, cl, dl) = (dl, t, bl, cl);

                let t = ar
                    .wrapping_add(f(3 - j, br, cr, dr))
                    .wrapping_add(x[R_RIGHT[j][i]])
                    .wrapping_add(K_RIGHT[j])
                    .rotate_left(S_RIGHT[j][i]);
                (ar, br, cr, dr) = (dr, t, br, cr);
            }
        }

        let h = self.state;
        self.state = [
            h[1].wrapping_add(cl).wrapping_add(dr),
            h[2].wrapping_add(dl).wrapping_add(ar),
            h[3].wrapping_add(al).wrapping_add(br),
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

pub type Ripemd128 = Engine<Ripemd128Core>;
