//! Integer counter mode
//!
//! Block `i` of a segment is XORed with `E(C0 + i mod 256^BS)` where
//! `C0 = IV + 256^(BS/2) mod 256^BS`. A segment holds at most `256^(BS/2)`
//! blocks; asking for more is a limit-reached error.

use super::ctr::increment_be;
use super::ModeKernel;
use crate::block::Cipher;
use crate::error::{Error, Result};
use gcrypto_api::{BlockCipher, ModeId};
use gcrypto_internal::xor_into;
use zeroize::Zeroizing;

#[derive(Clone, Default)]
pub struct IcmKernel {
    counter: Zeroizing<Vec<u8>>,
    blocks: u128,
    /// `None` when the segment is larger than a `u128` can count
    max_blocks: Option<u128>,
}

impl ModeKernel for IcmKernel {
    const ID: ModeId = ModeId::Icm;

    fn setup(&mut self, iv: &[u8]) {
        let bs = iv.len();
        let mut counter = Zeroizing::new(iv.to_vec());
        // add 256^(bs/2): increment starting at byte bs/2 from the right
        increment_be(&mut counter[..bs - bs / 2]);
        self.counter = counter;
        self.blocks = 0;
        self.max_blocks = 1u128.checked_shl(4 * bs as u32);
    }

    fn teardown(&mut self) {
        self.counter = Zeroizing::new(Vec::new());
        self.blocks = 0;
        self.max_blocks = None;
    }

    fn encrypt(&mut self, cipher: &Cipher, input: &[u8], out: &mut [u8]) -> Result<()> {
        if matches!(self.max_blocks, Some(max) if self.blocks >= max) {
            return Err(Error::LimitReached { context: "icm mode" });
        }
        let mut keystream = Zeroizing::new(vec![0u8; self.counter.len()]);
        cipher.encrypt_block(&self.counter, 0, &mut keystream, 0)?;
        increment_be(&mut self.counter);
        self.blocks += 1;
        out.copy_from_slice(input);
        xor_into(out, &keystream);
        Ok(())
    }
}
