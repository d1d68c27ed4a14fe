//! Output feedback mode

use super::ModeKernel;
use crate::block::Cipher;
use crate::error::Result;
use gcrypto_api::{BlockCipher, ModeId};
use gcrypto_internal::xor_into;
use zeroize::Zeroizing;

/// Keystream is the IV encrypted over and over
#[derive(Clone, Default)]
pub struct OfbKernel {
    register: Zeroizing<Vec<u8>>,
}

impl ModeKernel for OfbKernel {
    const ID: ModeId = ModeId::Ofb;

    fn setup(&mut self, iv: &[u8]) {
        self.register = Zeroizing::new(iv.to_vec());
    }

    fn teardown(&mut self) {
        self.register = Zeroizing::new(Vec::new());
    }

    fn encrypt(&mut self, cipher: &Cipher, input: &[u8], out: &mut [u8]) -> Result<()> {
        let mut next = Zeroizing::new(vec![0u8; self.register.len()]);
        cipher.encrypt_block(&self.register, 0, &mut next, 0)?;
        self.register = next;
        out.copy_from_slice(input);
        xor_into(out, &self.register);
        Ok(())
    }
}
