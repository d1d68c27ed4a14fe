//! The identity cipher
//!
//! Copies its input. Useful for exercising modes and pads without any
//! transformation getting in the way.

use super::{check_span, symmetry_test};
use crate::error::{Error, Result};
use gcrypto_api::{BlockCipher, CipherConfig};
use gcrypto_params::utils::symmetric::{NULL_BLOCK_SIZES, NULL_MAX_KEY_SIZE, NULL_MIN_KEY_SIZE};

const DEFAULT_SIZE: usize = 16;

#[derive(Clone, Debug, Default)]
pub struct NullCipher {
    /// Block size of the keyed instance
    current: Option<usize>,
}

impl NullCipher {
    pub fn new() -> Self {
        Self::default()
    }

    fn copy(&self, input: &[u8], in_off: usize, out: &mut [u8], out_off: usize) -> Result<()> {
        let bs = self.current_block_size()?;
        check_span("null input block", input.len(), in_off, bs)?;
        check_span("null output block", out.len(), out_off, bs)?;
        out[out_off..out_off + bs].copy_from_slice(&input[in_off..in_off + bs]);
        Ok(())
    }
}

impl BlockCipher for NullCipher {
    fn name(&self) -> &'static str {
        "null"
    }

    fn default_block_size(&self) -> usize {
        DEFAULT_SIZE
    }

    fn default_key_size(&self) -> usize {
        DEFAULT_SIZE
    }

    fn block_sizes(&self) -> Vec<usize> {
        NULL_BLOCK_SIZES.to_vec()
    }

    fn key_sizes(&self) -> Vec<usize> {
        (NULL_MIN_KEY_SIZE..=NULL_MAX_KEY_SIZE).collect()
    }

    fn init(&mut self, config: &CipherConfig) -> Result<()> {
        if self.current.is_some() {
            return Err(Error::state("null", "cipher is already keyed"));
        }
        let bs = config.block_size.unwrap_or(DEFAULT_SIZE);
        if !NULL_BLOCK_SIZES.contains(&bs) {
            return Err(Error::param("null", format!("unsupported block size {}", bs)));
        }
        let key = config
            .key
            .as_ref()
            .ok_or_else(|| Error::key("null", "no key material"))?;
        if !(NULL_MIN_KEY_SIZE..=NULL_MAX_KEY_SIZE).contains(&key.len()) {
            return Err(Error::key("null", format!("unsupported key length {}", key.len())));
        }
        self.current = Some(bs);
        Ok(())
    }

    fn current_block_size(&self) -> Result<usize> {
        self.current
            .ok_or_else(|| Error::state("null", "cipher is not keyed"))
    }

    fn encrypt_block(
        &self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
    ) -> Result<()> {
        self.copy(input, in_off, out, out_off)
    }

    fn decrypt_block(
        &self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
    ) -> Result<()> {
        self.copy(input, in_off, out, out_off)
    }

    fn reset(&mut self) {
        self.current = None;
    }

    fn self_test(&self) -> bool {
        symmetry_test(NullCipher::new)
    }
}
