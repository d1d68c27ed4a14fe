//! Block ciphers and their modes of operation
//!
//! [`Cipher`] is the closed set of block ciphers known to the registry and
//! [`CipherFactory`] the only place that constructs them by name.

pub mod aes;
pub mod modes;
pub mod null;
pub mod serpent;

pub use aes::Aes;
pub use modes::{Mode, ModeFactory};
pub use null::NullCipher;
pub use serpent::Serpent;

use crate::error::{validate, Error, Result};
use gcrypto_api::registry::{self, require_self_test};
use gcrypto_api::{BlockCipher, CipherConfig, CipherId};
use std::collections::BTreeSet;

/// Every registered block cipher
#[derive(Clone)]
pub enum Cipher {
    Aes(Aes),
    Null(NullCipher),
    Serpent(Serpent),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Cipher::Aes($inner) => $body,
            Cipher::Null($inner) => $body,
            Cipher::Serpent($inner) => $body,
        }
    };
}

impl Cipher {
    /// A fresh, unkeyed instance
    pub fn new(id: CipherId) -> Self {
        match id {
            CipherId::Aes => Cipher::Aes(Aes::new()),
            CipherId::Null => Cipher::Null(NullCipher::new()),
            CipherId::Serpent => Cipher::Serpent(Serpent::new()),
        }
    }

    pub fn id(&self) -> CipherId {
        match self {
            Cipher::Aes(_) => CipherId::Aes,
            Cipher::Null(_) => CipherId::Null,
            Cipher::Serpent(_) => CipherId::Serpent,
        }
    }
}

impl BlockCipher for Cipher {
    fn name(&self) -> &'static str {
        dispatch!(self, c => c.name())
    }

    fn default_block_size(&self) -> usize {
        dispatch!(self, c => c.default_block_size())
    }

    fn default_key_size(&self) -> usize {
        dispatch!(self, c => c.default_key_size())
    }

    fn block_sizes(&self) -> Vec<usize> {
        dispatch!(self, c => c.block_sizes())
    }

    fn key_sizes(&self) -> Vec<usize> {
        dispatch!(self, c => c.key_sizes())
    }

    fn init(&mut self, config: &CipherConfig) -> Result<()> {
        dispatch!(self, c => c.init(config))
    }

    fn current_block_size(&self) -> Result<usize> {
        dispatch!(self, c => c.current_block_size())
    }

    fn encrypt_block(
        &self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
    ) -> Result<()> {
        dispatch!(self, c => c.encrypt_block(input, in_off, out, out_off))
    }

    fn decrypt_block(
        &self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
    ) -> Result<()> {
        dispatch!(self, c => c.decrypt_block(input, in_off, out, out_off))
    }

    fn reset(&mut self) {
        dispatch!(self, c => c.reset())
    }

    fn self_test(&self) -> bool {
        dispatch!(self, c => c.self_test())
    }
}

/// Name-based construction of block ciphers
pub struct CipherFactory;

impl CipherFactory {
    /// Resolve `name` and return a self-tested, unkeyed instance
    ///
    /// # Panics
    ///
    /// When the resolved cipher fails its self-test.
    pub fn get_instance(name: &str) -> Option<Cipher> {
        let id = registry::resolve_cipher(name)?;
        tracing::debug!(requested = name, cipher = id.name(), "resolved block cipher");
        let cipher = Cipher::new(id);
        let passed = cipher.self_test();
        Some(require_self_test("cipher", id.name(), cipher, passed))
    }

    /// Canonical names of every registered cipher
    pub fn names() -> BTreeSet<&'static str> {
        registry::canonical_names(registry::CIPHERS)
    }
}

/// Check that `buf[offset..offset + len]` exists
pub(crate) fn check_span(
    context: &'static str,
    buf_len: usize,
    offset: usize,
    len: usize,
) -> Result<()> {
    let end = offset
        .checked_add(len)
        .ok_or_else(|| Error::param(context, "offset overflows"))?;
    validate::min_length(context, buf_len, end)
}

/// Key the output of `make` with every supported (key size, block size)
/// pair and check that decryption inverts encryption
pub(crate) fn symmetry_test<C, F>(make: F) -> bool
where
    C: BlockCipher,
    F: Fn() -> C,
{
    let probe = make();
    for ks in probe.key_sizes() {
        for bs in probe.block_sizes() {
            let key: Vec<u8> = (0..ks).map(|i| i as u8).collect();
            let pt: Vec<u8> = (0..bs).map(|i| i as u8).collect();
            let mut ct = vec![0u8; bs];
            let mut cpt = vec![0u8; bs];

            let mut cipher = make();
            let config = CipherConfig::new().with_key(&key).with_block_size(bs);
            let ok = cipher.init(&config).is_ok()
                && cipher.encrypt_block(&pt, 0, &mut ct, 0).is_ok()
                && cipher.decrypt_block(&ct, 0, &mut cpt, 0).is_ok();
            if !ok || pt != cpt {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_resolves_synonyms() {
        for name in ["aes", "Rijndael", "rijndael-128"] {
            let cipher = CipherFactory::get_instance(name).unwrap();
            assert_eq!(cipher.name(), "aes");
        }
        assert_eq!(CipherFactory::get_instance("null").unwrap().id(), CipherId::Null);
        assert_eq!(CipherFactory::get_instance("SERPENT").unwrap().id(), CipherId::Serpent);
        assert!(CipherFactory::get_instance("twofish").is_none());
    }

    #[test]
    fn test_names_are_canonical() {
        let names = CipherFactory::names();
        assert!(names.contains("aes"));
        assert!(names.contains("null"));
        assert!(names.contains("serpent"));
        assert!(!names.contains("rijndael"));
    }

    #[test]
    fn test_check_span() {
        assert!(check_span("t", 16, 0, 16).is_ok());
        assert!(matches!(
            check_span("t", 16, 1, 16),
            Err(Error::InvalidLength { expected: 17, actual: 16, .. })
        ));
        assert!(check_span("t", 16, usize::MAX, 2).is_err());
    }
}
