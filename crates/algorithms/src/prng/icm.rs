//! Integer counter mode generator
//!
//! Block `i` is `E_K(C_i)` with `C_i = (s * 256^BIL + r + i) mod 256^BS`,
//! where `s` is the segment index, `r` the offset, `BIL` the block index
//! length and `BS` the cipher block size. A segment yields at most
//! `256^BIL` blocks.

use super::BlockSource;
use crate::block::modes::ctr::increment_be;
use crate::block::Cipher;
use crate::error::{validate, Error, Result};
use gcrypto_api::{BlockCipher, CipherConfig, CipherId, IcmConfig, PrngConfig};

const DEFAULT_CIPHER: CipherId = CipherId::Aes;

#[derive(Clone)]
pub struct IcmSource {
    cipher: Cipher,
    counter: Vec<u8>,
    /// Blocks produced so far in this segment
    produced: u128,
    /// `None` when the segment outlasts any `u128` count
    max_blocks: Option<u128>,
}

impl Default for IcmSource {
    fn default() -> Self {
        Self {
            cipher: Cipher::new(DEFAULT_CIPHER),
            counter: Vec::new(),
            produced: 0,
            max_blocks: None,
        }
    }
}

/// Resolve the two index lengths; at least one must be given
fn index_lengths(config: &IcmConfig, block_size: usize) -> Result<(usize, usize)> {
    let limit = block_size / 2;
    let bil = config.block_index_len;
    let sil = config.segment_index_len;
    validate::parameter(bil != Some(0), "icm", "block index length must be positive")?;
    validate::parameter(sil != Some(0), "icm", "segment index length must be positive")?;

    let lengths = match (bil, sil) {
        (None, None) => None,
        (Some(b), None) => limit.checked_sub(b).map(|s| (b, s)),
        (None, Some(s)) => limit.checked_sub(s).map(|b| (b, s)),
        (Some(b), Some(s)) if b + s <= limit => Some((b, s)),
        _ => None,
    };
    lengths.ok_or_else(|| {
        Error::param(
            "icm",
            format!("index lengths must be given and fit in {} bytes", limit),
        )
    })
}

/// Add `value * 256^shift` to a big-endian counter, wrapping at its width
fn add_shifted(counter: &mut [u8], value: u64, shift: usize) {
    let bytes = value.to_be_bytes();
    let mut carry = 0u16;
    for (k, byte) in counter.iter_mut().rev().enumerate() {
        let v = k
            .checked_sub(shift)
            .and_then(|i| bytes.len().checked_sub(i + 1))
            .map_or(0, |i| bytes[i] as u16);
        let sum = *byte as u16 + v + carry;
        *byte = sum as u8;
        carry = sum >> 8;
    }
}

impl BlockSource for IcmSource {
    const NAME: &'static str = "icm";

    fn setup(&mut self, config: &PrngConfig) -> Result<()> {
        let config = match config {
            PrngConfig::Icm(c) => c,
            _ => return Err(Error::param("icm", "expected a counter mode configuration")),
        };
        let mut cipher = Cipher::new(config.cipher.unwrap_or(DEFAULT_CIPHER));
        let bs = config.block_size.unwrap_or_else(|| cipher.default_block_size());
        if !cipher.block_sizes().contains(&bs) {
            return Err(Error::param("icm", format!("unsupported block size {}", bs)));
        }
        let key = config
            .key
            .as_ref()
            .ok_or_else(|| Error::key("icm", "no key material"))?;
        if !cipher.key_sizes().contains(&key.len()) {
            return Err(Error::key("icm", format!("unsupported key length {}", key.len())));
        }
        let (bil, sil) = index_lengths(config, bs)?;

        let in_range = 1u64
            .checked_shl(8 * sil as u32)
            .map_or(true, |segments| config.segment_index < segments);
        validate::parameter(in_range, "icm", "segment index does not fit its length")?;

        let mut counter = match &config.offset {
            Some(offset) if offset.len() != bs => {
                return Err(Error::param(
                    "icm",
                    format!("offset must be {} bytes, got {}", bs, offset.len()),
                ));
            }
            Some(offset) => offset.clone(),
            None => vec![0u8; bs],
        };
        add_shifted(&mut counter, config.segment_index, bil);

        cipher.init(&CipherConfig::new().with_key(key).with_block_size(bs))?;
        self.cipher = cipher;
        self.counter = counter;
        self.produced = 0;
        self.max_blocks = 1u128.checked_shl(8 * bil as u32);
        Ok(())
    }

    fn next_block(&mut self) -> Result<Vec<u8>> {
        if self.max_blocks.map_or(false, |max| self.produced >= max) {
            return Err(Error::LimitReached { context: "icm" });
        }
        let mut block = vec![0u8; self.counter.len()];
        self.cipher.encrypt_block(&self.counter, 0, &mut block, 0)?;
        increment_be(&mut self.counter);
        self.produced += 1;
        Ok(block)
    }

    fn known_answer() -> (PrngConfig, &'static str) {
        let config = IcmConfig::new()
            .with_key(&[
                0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
                0x4f, 0x3c,
            ])
            .with_offset(&[
                0xf0, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7, 0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd,
                0xfe, 0xff,
            ])
            .with_block_index_len(8);
        (
            PrngConfig::Icm(config),
            "ec8cdf7398607cb0f2d21675ea9ea1e4362b7c3c6773516318a077d7fc5073ae",
        )
    }
}
