//! PKCS#7 padding
//!
//! Appends `n = bs - (len mod bs)` bytes of value `n`, a whole block when
//! the data is already aligned.

use super::{checked_block_size, round_trip_test, SELF_TEST_BLOCK_SIZES};
use crate::error::{validate, Error, Result};
use gcrypto_api::PaddingScheme;
use gcrypto_params::utils::symmetric::PKCS7_MAX_BLOCK_SIZE;
use subtle::{ConstantTimeEq, ConstantTimeGreater};

const NAME: &str = "pkcs7";

#[derive(Clone, Debug, Default)]
pub struct Pkcs7 {
    block_size: Option<usize>,
}

impl Pkcs7 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaddingScheme for Pkcs7 {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, block_size: usize) -> Result<()> {
        validate::state(self.block_size.is_none(), NAME, "padding is already initialised")?;
        if !(2..=PKCS7_MAX_BLOCK_SIZE).contains(&block_size) {
            return Err(Error::param(
                NAME,
                format!("block size {} outside 2..={}", block_size, PKCS7_MAX_BLOCK_SIZE),
            ));
        }
        self.block_size = Some(block_size);
        Ok(())
    }

    fn pad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let bs = checked_block_size(self.block_size, NAME)?;
        let n = bs - data.len() % bs;
        Ok(vec![n as u8; n])
    }

    fn unpad(&self, padded: &[u8]) -> Result<usize> {
        let bs = checked_block_size(self.block_size, NAME)?;
        if padded.is_empty() || padded.len() % bs != 0 {
            return Err(Error::corrupt(NAME, "input is not a whole number of blocks"));
        }
        let last = padded[padded.len() - 1];
        let n = last as u64;
        let mut valid = n.ct_gt(&0) & !n.ct_gt(&(bs as u64));

        // examine the whole final block so the work does not depend on `n`
        let tail = &padded[padded.len() - bs..];
        for (i, &b) in tail.iter().rev().enumerate() {
            let inside = n.ct_gt(&(i as u64));
            valid &= !inside | b.ct_eq(&last);
        }
        if bool::from(valid) {
            Ok(padded.len() - last as usize)
        } else {
            Err(Error::corrupt(NAME, "invalid padding bytes"))
        }
    }

    fn reset(&mut self) {
        self.block_size = None;
    }

    fn self_test(&self) -> bool {
        round_trip_test::<Pkcs7>(&SELF_TEST_BLOCK_SIZES)
    }
}
