//! Hash-chain generator
//!
//! The running digest absorbs the seed. Each block is the digest of a
//! clone of the running state, which is then absorbed back into it.

use super::BlockSource;
use crate::error::{Error, Result};
use crate::hash::Hash;
use gcrypto_api::{HashId, MdConfig, MessageDigest, PrngConfig};

const DEFAULT_HASH: HashId = HashId::Sha160;

#[derive(Clone)]
pub struct MdSource {
    hash: Hash,
}

impl Default for MdSource {
    fn default() -> Self {
        Self {
            hash: Hash::new(DEFAULT_HASH),
        }
    }
}

impl BlockSource for MdSource {
    const NAME: &'static str = "md";

    fn setup(&mut self, config: &PrngConfig) -> Result<()> {
        let default = MdConfig::new();
        let config = match config {
            PrngConfig::Md(c) => c,
            PrngConfig::Empty => &default,
            PrngConfig::Icm(_) => {
                return Err(Error::param("md", "expected a hash-chain configuration"))
            }
        };
        let mut hash = Hash::new(config.hash.unwrap_or(DEFAULT_HASH));
        if let Some(seed) = &config.seed {
            hash.update(seed);
        }
        self.hash = hash;
        Ok(())
    }

    fn next_block(&mut self) -> Result<Vec<u8>> {
        let block = self.hash.clone().digest();
        self.hash.update(&block);
        Ok(block)
    }

    fn known_answer() -> (PrngConfig, &'static str) {
        (
            PrngConfig::Md(MdConfig::new().with_seed(b"abc")),
            "a9993e364706816aba3e25717850c26c9cd0d89da5624692d4363e4c60c9bd61de14a4a4f5b60ac9",
        )
    }
}
