//! Electronic codebook mode

use super::ModeKernel;
use crate::block::Cipher;
use crate::error::Result;
use gcrypto_api::{BlockCipher, ModeId};

/// Each block goes through the cipher on its own
#[derive(Clone, Debug, Default)]
pub struct EcbKernel;

impl ModeKernel for EcbKernel {
    const ID: ModeId = ModeId::Ecb;

    fn setup(&mut self, _iv: &[u8]) {}

    fn teardown(&mut self) {}

    fn encrypt(&mut self, cipher: &Cipher, input: &[u8], out: &mut [u8]) -> Result<()> {
        cipher.encrypt_block(input, 0, out, 0)
    }

    fn decrypt(&mut self, cipher: &Cipher, input: &[u8], out: &mut [u8]) -> Result<()> {
        cipher.decrypt_block(input, 0, out, 0)
    }
}
