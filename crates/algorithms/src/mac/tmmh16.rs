//! TMMH/16 universal hash
//!
//! Message and key are read as big-endian 16-bit words, an odd trailing
//! byte is padded with zero. Output word `j` of a message of `m` words and
//! `L` bytes is
//!
//! ```text
//! ((sum_{i<m} K[i + 1 + j] * M[i] mod 2^32) + K[j] * L) mod p   (p = 2^16 + 1)
//! ```
//!
//! truncated to 16 bits. Key words are drawn from the keystream once and
//! reused for every message under the same key.

use crate::error::{Error, Result};
use crate::prng::{BlockSource, BufferedPrng};
use gcrypto_api::{MacConfig, MacFunction, PrngConfig, RandomGenerator};
use gcrypto_internal::xor_into;
use gcrypto_params::utils::symmetric::{TMMH16_MAX_TAG_LEN, TMMH16_P};
use zeroize::Zeroizing;

/// Keystream that repeats one fixed block
#[derive(Clone, Default)]
pub(crate) struct RepeatingKeystream;

pub(crate) const TEST_KEYSTREAM: [u8; 10] =
    [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc];

impl BlockSource for RepeatingKeystream {
    const NAME: &'static str = "repeating";

    fn setup(&mut self, _config: &PrngConfig) -> Result<()> {
        Ok(())
    }

    fn next_block(&mut self) -> Result<Vec<u8>> {
        Ok(TEST_KEYSTREAM.to_vec())
    }

    fn known_answer() -> (PrngConfig, &'static str) {
        (PrngConfig::Empty, "0123456789abcdeffedc0123")
    }
}

/// A fresh repeating keystream, ready to key a [`Tmmh16`]
pub(crate) fn repeating_keystream() -> Result<Box<dyn RandomGenerator + Send>> {
    let mut prng = BufferedPrng::<RepeatingKeystream>::new();
    prng.init(&PrngConfig::Empty)?;
    Ok(Box::new(prng))
}

#[derive(Default)]
pub struct Tmmh16 {
    keystream: Option<Box<dyn RandomGenerator + Send>>,
    /// Key words drawn so far
    key: Zeroizing<Vec<u16>>,
    prefix: Option<Zeroizing<Vec<u8>>>,
    tag_words: usize,
    accumulators: Vec<u32>,
    /// High byte of an incomplete message word
    pending: Option<u8>,
    words: usize,
    msg_len: u64,
}

impl Tmmh16 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw key words until at least `count` are available
    fn ensure_key(&mut self, count: usize) -> Result<()> {
        let keystream = self
            .keystream
            .as_mut()
            .ok_or_else(|| Error::state("tmmh16", "mac is not keyed"))?;
        while self.key.len() < count {
            let mut w = [0u8; 2];
            keystream.fill(&mut w)?;
            self.key.push(u16::from_be_bytes(w));
        }
        Ok(())
    }

    fn absorb_word(&mut self, word: u16) -> Result<()> {
        self.ensure_key(self.words + 1 + self.tag_words)?;
        let base = self.words + 1;
        for (j, acc) in self.accumulators.iter_mut().enumerate() {
            let product = self.key[base + j] as u32 * word as u32;
            *acc = acc.wrapping_add(product);
        }
        self.words += 1;
        Ok(())
    }
}

impl MacFunction for Tmmh16 {
    fn name(&self) -> String {
        "tmmh16".to_string()
    }

    fn mac_size(&self) -> usize {
        self.tag_words * 2
    }

    fn init(&mut self, config: MacConfig) -> Result<()> {
        let context = "tmmh16";
        let tag_len = config
            .tag_len
            .ok_or_else(|| Error::param(context, "tag length is required"))?;
        if tag_len < 2 || tag_len > TMMH16_MAX_TAG_LEN || tag_len % 2 != 0 {
            return Err(Error::param(
                context,
                format!("tag length {} is not even in 2..={}", tag_len, TMMH16_MAX_TAG_LEN),
            ));
        }
        if let Some(prefix) = &config.prefix {
            if prefix.len() != tag_len {
                return Err(Error::param(
                    context,
                    format!("prefix must be {} bytes, got {}", tag_len, prefix.len()),
                ));
            }
        }
        let keystream = config
            .keystream
            .ok_or_else(|| Error::key(context, "no keystream"))?;

        *self = Self {
            keystream: Some(keystream),
            prefix: config.prefix.map(Zeroizing::new),
            tag_words: tag_len / 2,
            accumulators: vec![0; tag_len / 2],
            ..Self::default()
        };
        let words = self.tag_words;
        if let Err(e) = self.ensure_key(words) {
            *self = Self::default();
            return Err(e);
        }
        Ok(())
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.keystream.is_none() {
            return Err(Error::state("tmmh16", "mac is not keyed"));
        }
        for &b in data {
            match self.pending.take() {
                Some(high) => self.absorb_word(u16::from_be_bytes([high, b]))?,
                None => self.pending = Some(b),
            }
            self.msg_len += 1;
        }
        Ok(())
    }

    fn digest(&mut self) -> Result<Vec<u8>> {
        if self.keystream.is_none() {
            return Err(Error::state("tmmh16", "mac is not keyed"));
        }
        if let Some(high) = self.pending.take() {
            self.absorb_word(u16::from_be_bytes([high, 0]))?;
        }
        let len = self.msg_len % TMMH16_P;
        let mut tag = Vec::with_capacity(self.mac_size());
        for (j, acc) in self.accumulators.iter().enumerate() {
            let word = (*acc as u64 + self.key[j] as u64 * len) % TMMH16_P;
            tag.extend_from_slice(&(word as u16).to_be_bytes());
        }
        if let Some(prefix) = &self.prefix {
            xor_into(&mut tag, prefix);
        }
        self.reset();
        Ok(tag)
    }

    fn reset(&mut self) {
        self.accumulators.iter_mut().for_each(|a| *a = 0);
        self.pending = None;
        self.words = 0;
        self.msg_len = 0;
    }

    fn self_test(&self) -> bool {
        let message = [0xca, 0xfe, 0xba, 0xbe, 0xba, 0xde];
        let run = |tag_len: usize, data: &[u8]| -> Result<Vec<u8>> {
            let mut mac = Tmmh16::new();
            mac.init(
                MacConfig::new()
                    .with_keystream(repeating_keystream()?)
                    .with_tag_len(tag_len),
            )?;
            mac.update(data)?;
            mac.digest()
        };
        matches!(run(4, &message), Ok(t) if t == [0x9d, 0x6a, 0xc0, 0xd3])
            && matches!(run(2, &message[..3]), Ok(t) if t == [0xc8, 0x8e])
    }
}
