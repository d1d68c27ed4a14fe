//! Trailing bit complement padding
//!
//! Pads with `0x00` bytes when the last data bit is set and with `0x01`
//! bytes otherwise, so the padding run is always distinguishable from the
//! data. Empty input counts as ending in a clear bit.

use super::{checked_block_size, round_trip_test, SELF_TEST_BLOCK_SIZES};
use crate::error::{validate, Error, Result};
use gcrypto_api::PaddingScheme;
use gcrypto_params::utils::symmetric::TBC_MAX_BLOCK_SIZE;

const NAME: &str = "tbc";

#[derive(Clone, Debug, Default)]
pub struct Tbc {
    block_size: Option<usize>,
}

impl Tbc {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaddingScheme for Tbc {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, block_size: usize) -> Result<()> {
        validate::state(self.block_size.is_none(), NAME, "padding is already initialised")?;
        if !(1..=TBC_MAX_BLOCK_SIZE).contains(&block_size) {
            return Err(Error::param(
                NAME,
                format!("block size {} outside 1..={}", block_size, TBC_MAX_BLOCK_SIZE),
            ));
        }
        self.block_size = Some(block_size);
        Ok(())
    }

    fn pad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let bs = checked_block_size(self.block_size, NAME)?;
        let n = bs - data.len() % bs;
        let last_bit = data.last().map_or(0, |b| b & 1);
        Ok(vec![last_bit ^ 1; n])
    }

    fn unpad(&self, padded: &[u8]) -> Result<usize> {
        let bs = checked_block_size(self.block_size, NAME)?;
        if padded.is_empty() || padded.len() % bs != 0 {
            return Err(Error::corrupt(NAME, "input is not a whole number of blocks"));
        }
        let last = padded[padded.len() - 1];
        if last > 1 {
            return Err(Error::corrupt(NAME, "trailing byte is not a pad byte"));
        }
        let run = padded.iter().rev().take_while(|&&b| b == last).count();
        if run > bs {
            return Err(Error::corrupt(NAME, "padding run exceeds a block"));
        }
        Ok(padded.len() - run)
    }

    fn reset(&mut self) {
        self.block_size = None;
    }

    fn self_test(&self) -> bool {
        round_trip_test::<Tbc>(&[&[1][..], &SELF_TEST_BLOCK_SIZES[..], &[256][..]].concat())
    }
}
