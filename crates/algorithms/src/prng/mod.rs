//! Pseudo-random generators
//!
//! A generator is a [`BlockSource`] producing whole blocks on demand,
//! wrapped in a [`BufferedPrng`] that serves them out byte by byte.

pub mod icm;
pub mod md;

pub use icm::IcmSource;
pub use md::MdSource;

use crate::error::{validate, Error, Result};
use gcrypto_api::registry::{self, require_self_test};
use gcrypto_api::{PrngConfig, PrngId, RandomGenerator};
use std::collections::BTreeSet;
use zeroize::Zeroizing;

/// Producer of the blocks a [`BufferedPrng`] serves
pub trait BlockSource: Clone + Default {
    const NAME: &'static str;

    /// Read the configuration; called once, before the first block
    fn setup(&mut self, config: &PrngConfig) -> Result<()>;

    /// The next block of output
    ///
    /// # Errors
    ///
    /// `LimitReached` once the source cannot produce more output.
    fn next_block(&mut self) -> Result<Vec<u8>>;

    /// Configuration and expected hex output checked by `self_test`
    fn known_answer() -> (PrngConfig, &'static str);
}

/// Byte-at-a-time view over a [`BlockSource`]
///
/// The buffer holds the latest block and `index` the next byte to serve;
/// `0 <= index <= buffer.len()` at all times.
#[derive(Clone, Default)]
pub struct BufferedPrng<S: BlockSource> {
    source: S,
    buffer: Zeroizing<Vec<u8>>,
    index: usize,
    initialised: bool,
    exhausted: bool,
}

pub type MdPrng = BufferedPrng<MdSource>;
pub type IcmPrng = BufferedPrng<IcmSource>;

impl<S: BlockSource> BufferedPrng<S> {
    pub fn new() -> Self {
        Self::default()
    }

    fn refill(&mut self) -> Result<()> {
        if self.exhausted {
            return Err(Error::LimitReached { context: S::NAME });
        }
        match self.source.next_block() {
            Ok(block) => {
                tracing::trace!(prng = S::NAME, len = block.len(), "refilled block");
                self.buffer = Zeroizing::new(block);
                self.index = 0;
                Ok(())
            }
            Err(e) => {
                self.exhausted = true;
                Err(e)
            }
        }
    }

    /// Draw the known-answer output from a fresh instance
    pub fn self_test(&self) -> bool {
        let (config, expected) = S::known_answer();
        let mut prng = Self::new();
        if prng.init(&config).is_err() {
            return false;
        }
        let mut out = vec![0u8; expected.len() / 2];
        prng.fill(&mut out).is_ok() && hex::encode(out) == expected
    }
}

impl<S: BlockSource> RandomGenerator for BufferedPrng<S> {
    fn name(&self) -> &'static str {
        S::NAME
    }

    fn init(&mut self, config: &PrngConfig) -> Result<()> {
        validate::state(!self.initialised, S::NAME, "generator is already initialised")?;
        let mut source = S::default();
        source.setup(config)?;
        self.source = source;
        self.buffer = Zeroizing::new(Vec::new());
        self.index = 0;
        self.exhausted = false;
        self.initialised = true;
        Ok(())
    }

    fn is_initialised(&self) -> bool {
        self.initialised
    }

    fn next_byte(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.next_bytes(&mut b, 0, 1)?;
        Ok(b[0])
    }

    fn next_bytes(&mut self, out: &mut [u8], offset: usize, length: usize) -> Result<()> {
        validate::state(self.initialised, S::NAME, "generator is not initialised")?;
        validate::window(S::NAME, out.len(), offset, length)?;

        let mut written = 0;
        while written < length {
            if self.index == self.buffer.len() {
                self.refill()?;
            }
            let take = (self.buffer.len() - self.index).min(length - written);
            let dst = offset + written;
            out[dst..dst + take].copy_from_slice(&self.buffer[self.index..self.index + take]);
            self.index += take;
            written += take;
        }
        Ok(())
    }
}

/// Every registered generator
#[derive(Clone)]
pub enum Prng {
    Md(MdPrng),
    Icm(IcmPrng),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Prng::Md($inner) => $body,
            Prng::Icm($inner) => $body,
        }
    };
}

impl Prng {
    /// An uninitialised generator
    pub fn new(id: PrngId) -> Self {
        match id {
            PrngId::Md => Prng::Md(MdPrng::new()),
            PrngId::Icm => Prng::Icm(IcmPrng::new()),
        }
    }

    pub fn id(&self) -> PrngId {
        match self {
            Prng::Md(_) => PrngId::Md,
            Prng::Icm(_) => PrngId::Icm,
        }
    }

    pub fn self_test(&self) -> bool {
        dispatch!(self, p => p.self_test())
    }
}

impl RandomGenerator for Prng {
    fn name(&self) -> &'static str {
        dispatch!(self, p => p.name())
    }

    fn init(&mut self, config: &PrngConfig) -> Result<()> {
        dispatch!(self, p => p.init(config))
    }

    fn is_initialised(&self) -> bool {
        dispatch!(self, p => p.is_initialised())
    }

    fn next_byte(&mut self) -> Result<u8> {
        dispatch!(self, p => p.next_byte())
    }

    fn next_bytes(&mut self, out: &mut [u8], offset: usize, length: usize) -> Result<()> {
        dispatch!(self, p => p.next_bytes(out, offset, length))
    }
}

/// Name-based construction of generators
pub struct PrngFactory;

impl PrngFactory {
    /// Resolve `name` and return a self-tested, uninitialised generator
    ///
    /// # Panics
    ///
    /// When the generator fails its self-test.
    pub fn get_instance(name: &str) -> Option<Prng> {
        let id = registry::resolve_prng(name)?;
        tracing::debug!(requested = name, prng = id.name(), "resolved generator");
        let prng = Prng::new(id);
        let passed = prng.self_test();
        Some(require_self_test("prng", id.name(), prng, passed))
    }

    /// Canonical names of every registered generator
    pub fn names() -> BTreeSet<&'static str> {
        registry::canonical_names(registry::PRNGS)
    }
}
