//! Pseudo-random generator contract

use crate::config::PrngConfig;
use crate::Result;

/// Deterministic byte generator
///
/// Object safe, so that a MAC can be keyed with any generator as its
/// keystream.
pub trait RandomGenerator {
    fn name(&self) -> &'static str;

    /// Seed the generator; allowed once
    fn init(&mut self, config: &PrngConfig) -> Result<()>;

    fn is_initialised(&self) -> bool;

    fn next_byte(&mut self) -> Result<u8>;

    /// Fill `out[offset..offset + length]`
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the window exceeds `out`, `InvalidState` before
    /// `init`, `LimitReached` once the generator is exhausted.
    fn next_bytes(&mut self, out: &mut [u8], offset: usize, length: usize) -> Result<()>;

    /// Fill the whole of `out`
    fn fill(&mut self, out: &mut [u8]) -> Result<()> {
        let len = out.len();
        self.next_bytes(out, 0, len)
    }
}
