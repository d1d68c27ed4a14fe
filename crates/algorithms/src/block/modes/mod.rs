//! Block cipher modes of operation
//!
//! Every mode wraps a [`Cipher`] and transforms exactly one mode block per
//! `update`. The mode block size always equals the cipher block size.

pub mod ctr;
pub mod ecb;
pub mod icm;
pub mod ofb;

pub use ctr::CtrKernel;
pub use ecb::EcbKernel;
pub use icm::IcmKernel;
pub use ofb::OfbKernel;

use super::{check_span, Cipher, CipherFactory};
use crate::error::{Error, Result};
use gcrypto_api::registry;
use gcrypto_api::{BlockCipher, CipherConfig, CipherMode, Direction, ModeConfig, ModeId};
use std::collections::BTreeSet;
use zeroize::Zeroizing;

/// Blocks processed by the mode self-test in each direction
const SELF_TEST_BLOCKS: usize = 5;

/// The per-mode part of a [`BlockMode`]: how one block is transformed
pub trait ModeKernel: Clone + Default {
    const ID: ModeId;

    /// Load the IV; called after the cipher is keyed
    fn setup(&mut self, iv: &[u8]);

    /// Forget everything `setup` loaded
    fn teardown(&mut self);

    /// Transform one block in the encryption direction
    fn encrypt(&mut self, cipher: &Cipher, input: &[u8], out: &mut [u8]) -> Result<()>;

    /// Transform one block in the decryption direction
    fn decrypt(&mut self, cipher: &Cipher, input: &[u8], out: &mut [u8]) -> Result<()> {
        self.encrypt(cipher, input, out)
    }
}

/// A cipher driven through a mode kernel
#[derive(Clone)]
pub struct BlockMode<K: ModeKernel> {
    cipher: Cipher,
    cipher_block_size: usize,
    direction: Option<Direction>,
    kernel: K,
}

pub type Ecb = BlockMode<EcbKernel>;
pub type Ctr = BlockMode<CtrKernel>;
pub type Icm = BlockMode<IcmKernel>;
pub type Ofb = BlockMode<OfbKernel>;

impl<K: ModeKernel> BlockMode<K> {
    /// Wrap an unkeyed cipher that will run with `cipher_block_size` blocks
    pub fn new(cipher: Cipher, cipher_block_size: usize) -> Self {
        Self {
            cipher,
            cipher_block_size,
            direction: None,
            kernel: K::default(),
        }
    }

    fn context(&self) -> &'static str {
        K::ID.name()
    }
}

impl<K: ModeKernel> CipherMode for BlockMode<K> {
    fn name(&self) -> String {
        format!("{}({})", K::ID.name(), self.cipher.name())
    }

    fn default_block_size(&self) -> usize {
        self.cipher_block_size
    }

    fn init(&mut self, config: &ModeConfig) -> Result<()> {
        let context = self.context();
        if self.direction.is_some() {
            return Err(Error::state(context, "mode is already initialised"));
        }
        let bs = self.cipher_block_size;
        let mode_bs = config.mode_block_size.unwrap_or(bs);
        if mode_bs != bs {
            return Err(Error::param(
                context,
                format!("mode block size {} differs from cipher block size {}", mode_bs, bs),
            ));
        }
        if let Some(requested) = config.cipher.block_size {
            if requested != bs {
                return Err(Error::param(
                    context,
                    format!("cipher block size {} differs from {}", requested, bs),
                ));
            }
        }
        let iv = match &config.iv {
            Some(iv) if iv.len() != bs => {
                return Err(Error::param(
                    context,
                    format!("iv must be {} bytes, got {}", bs, iv.len()),
                ));
            }
            Some(iv) => Zeroizing::new(iv.clone()),
            None => Zeroizing::new(vec![0u8; bs]),
        };

        let cipher_config = CipherConfig {
            block_size: Some(bs),
            ..config.cipher.clone()
        };
        self.cipher.init(&cipher_config)?;
        self.kernel.setup(&iv);
        self.direction = Some(config.direction);
        Ok(())
    }

    fn current_block_size(&self) -> Result<usize> {
        match self.direction {
            Some(_) => Ok(self.cipher_block_size),
            None => Err(Error::state(self.context(), "mode is not initialised")),
        }
    }

    fn update(
        &mut self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
    ) -> Result<()> {
        let context = self.context();
        let direction = self
            .direction
            .ok_or_else(|| Error::state(context, "mode is not initialised"))?;
        let bs = self.cipher_block_size;
        check_span(context, input.len(), in_off, bs)?;
        check_span(context, out.len(), out_off, bs)?;

        let input = &input[in_off..in_off + bs];
        let out = &mut out[out_off..out_off + bs];
        match direction {
            Direction::Encryption => self.kernel.encrypt(&self.cipher, input, out),
            Direction::Decryption => self.kernel.decrypt(&self.cipher, input, out),
        }
    }

    fn reset(&mut self) {
        self.direction = None;
        self.cipher.reset();
        self.kernel.teardown();
    }

    /// Five-block round trip under a zero IV for every key size of the cipher
    fn self_test(&self) -> bool {
        let bs = self.cipher_block_size;
        let limit = SELF_TEST_BLOCKS * bs;
        let pt: Vec<u8> = (0..limit).map(|i| i as u8).collect();

        self.cipher.key_sizes().into_iter().all(|ks| {
            let key: Vec<u8> = (0..ks).map(|i| i as u8).collect();
            let config = ModeConfig::new(CipherConfig::new().with_key(&key).with_block_size(bs))
                .with_iv(&vec![0u8; bs])
                .with_mode_block_size(bs);

            let mut mode = self.clone();
            let mut ct = vec![0u8; limit];
            let mut cpt = vec![0u8; limit];

            mode.reset();
            if mode.init(&config).is_err() {
                return false;
            }
            for i in 0..SELF_TEST_BLOCKS {
                if mode.update(&pt, i * bs, &mut ct, i * bs).is_err() {
                    return false;
                }
            }
            mode.reset();
            if mode.init(&config.with_direction(Direction::Decryption)).is_err() {
                return false;
            }
            for i in 0..SELF_TEST_BLOCKS {
                if mode.update(&ct, i * bs, &mut cpt, i * bs).is_err() {
                    return false;
                }
            }
            pt == cpt
        })
    }
}

/// Every registered mode of operation
#[derive(Clone)]
pub enum Mode {
    Ecb(Ecb),
    Ctr(Ctr),
    Icm(Icm),
    Ofb(Ofb),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Mode::Ecb($inner) => $body,
            Mode::Ctr($inner) => $body,
            Mode::Icm($inner) => $body,
            Mode::Ofb($inner) => $body,
        }
    };
}

impl Mode {
    pub fn new(id: ModeId, cipher: Cipher, cipher_block_size: usize) -> Self {
        match id {
            ModeId::Ecb => Mode::Ecb(Ecb::new(cipher, cipher_block_size)),
            ModeId::Ctr => Mode::Ctr(Ctr::new(cipher, cipher_block_size)),
            ModeId::Icm => Mode::Icm(Icm::new(cipher, cipher_block_size)),
            ModeId::Ofb => Mode::Ofb(Ofb::new(cipher, cipher_block_size)),
        }
    }

    pub fn id(&self) -> ModeId {
        match self {
            Mode::Ecb(_) => ModeId::Ecb,
            Mode::Ctr(_) => ModeId::Ctr,
            Mode::Icm(_) => ModeId::Icm,
            Mode::Ofb(_) => ModeId::Ofb,
        }
    }
}

impl CipherMode for Mode {
    fn name(&self) -> String {
        dispatch!(self, m => m.name())
    }

    fn default_block_size(&self) -> usize {
        dispatch!(self, m => m.default_block_size())
    }

    fn init(&mut self, config: &ModeConfig) -> Result<()> {
        dispatch!(self, m => m.init(config))
    }

    fn current_block_size(&self) -> Result<usize> {
        dispatch!(self, m => m.current_block_size())
    }

    fn update(
        &mut self,
        input: &[u8],
        in_off: usize,
        out: &mut [u8],
        out_off: usize,
    ) -> Result<()> {
        dispatch!(self, m => m.update(input, in_off, out, out_off))
    }

    fn reset(&mut self) {
        dispatch!(self, m => m.reset())
    }

    fn self_test(&self) -> bool {
        dispatch!(self, m => m.self_test())
    }
}

/// Name-based construction of modes over a named cipher
pub struct ModeFactory;

impl ModeFactory {
    /// Resolve `mode` and `cipher` and return a self-tested, unkeyed mode
    /// running `cipher` with `block_size` byte blocks
    ///
    /// `None` when either name is unknown or the cipher does not support
    /// `block_size`.
    ///
    /// # Panics
    ///
    /// When the cipher or the assembled mode fails its self-test.
    pub fn get_instance(mode: &str, cipher: &str, block_size: usize) -> Option<Mode> {
        let id = registry::resolve_mode(mode)?;
        let cipher = CipherFactory::get_instance(cipher)?;
        if !cipher.block_sizes().contains(&block_size) {
            tracing::debug!(
                mode = id.name(),
                cipher = cipher.name(),
                block_size,
                "unsupported block size for mode"
            );
            return None;
        }
        let mode = Mode::new(id, cipher, block_size);
        let passed = mode.self_test();
        Some(registry::require_self_test("mode", &mode.name(), mode, passed))
    }

    /// Canonical names of every registered mode
    pub fn names() -> BTreeSet<&'static str> {
        registry::canonical_names(registry::MODES)
    }
}

#[cfg(test)]
mod tests;
