//! Counter mode
//!
//! The counter block starts at the IV and is incremented as one big-endian
//! integer, wrapping modulo 256^blocksize.

use super::ModeKernel;
use crate::block::Cipher;
use crate::error::Result;
use gcrypto_api::{BlockCipher, ModeId};
use gcrypto_internal::xor_into;
use zeroize::Zeroizing;

#[derive(Clone, Default)]
pub struct CtrKernel {
    counter: Zeroizing<Vec<u8>>,
}

/// Add one to a big-endian integer, wrapping on overflow
pub(crate) fn increment_be(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            break;
        }
    }
}

impl ModeKernel for CtrKernel {
    const ID: ModeId = ModeId::Ctr;

    fn setup(&mut self, iv: &[u8]) {
        self.counter = Zeroizing::new(iv.to_vec());
    }

    fn teardown(&mut self) {
        self.counter = Zeroizing::new(Vec::new());
    }

    fn encrypt(&mut self, cipher: &Cipher, input: &[u8], out: &mut [u8]) -> Result<()> {
        let mut keystream = Zeroizing::new(vec![0u8; self.counter.len()]);
        cipher.encrypt_block(&self.counter, 0, &mut keystream, 0)?;
        increment_be(&mut self.counter);
        out.copy_from_slice(input);
        xor_into(out, &keystream);
        Ok(())
    }
}
