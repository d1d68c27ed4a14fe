//! Padding scheme contract

use crate::Result;

/// Reversible block padding
///
/// `pad(data)` returns only the padding bytes to append; `unpad(padded)`
/// returns the length of the original data.
pub trait PaddingScheme {
    fn name(&self) -> &'static str;

    /// Fix the block size
    ///
    /// # Errors
    ///
    /// `InvalidState` when already initialised, `InvalidParameter` when the
    /// block size is outside the supported range.
    fn init(&mut self, block_size: usize) -> Result<()>;

    fn pad(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// # Errors
    ///
    /// `CorruptData` when the trailing bytes are not valid padding.
    fn unpad(&self, padded: &[u8]) -> Result<usize>;

    fn reset(&mut self);

    fn self_test(&self) -> bool;
}
