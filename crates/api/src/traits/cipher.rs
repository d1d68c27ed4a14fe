//! Block cipher and mode of operation contracts

use crate::config::{CipherConfig, ModeConfig};
use crate::Result;

/// A keyed permutation over fixed-size blocks
///
/// An instance starts uninitialised; `init` keys it once and `reset`
/// returns it to the uninitialised state. Keying an initialised instance
/// without a `reset` in between is an invalid-state error.
pub trait BlockCipher {
    /// Canonical name of the cipher
    fn name(&self) -> &'static str;

    /// Block size used when the configuration names none
    fn default_block_size(&self) -> usize;

    /// Key size used by the self-test and by callers without a preference
    fn default_key_size(&self) -> usize;

    /// Every supported block size, ascending
    fn block_sizes(&self) -> Vec<usize>;

    /// Every supported key size, ascending
    fn key_sizes(&self) -> Vec<usize>;

    /// Key the instance
    ///
    /// # Errors
    ///
    /// - `InvalidState` when already keyed
    /// - `InvalidKey` when the key is missing or of an unsupported length
    /// - `InvalidParameter` when the block size is unsupported
    fn init(&mut self, config: &CipherConfig) -> Result<()>;

    /// Block size the instance was keyed with
    fn current_block_size(&self) -> Result<usize>;

    /// Encrypt one block from `input[in_off..]` into `out[out_off..]`
    fn encrypt_block(&self, input: &[u8], in_off: usize, out: &mut [u8], out_off: usize)
        -> Result<()>;

    /// Decrypt one block from `input[in_off..]` into `out[out_off..]`
    fn decrypt_block(&self, input: &[u8], in_off: usize, out: &mut [u8], out_off: usize)
        -> Result<()>;

    /// Wipe the session key
    fn reset(&mut self);

    /// Symmetry over every (block size, key size) pair plus known answers
    fn self_test(&self) -> bool;
}

/// A block cipher mode of operation
pub trait CipherMode {
    /// Name of the mode and its cipher, `ctr(aes)`
    fn name(&self) -> String;

    fn default_block_size(&self) -> usize;

    /// Key the underlying cipher and load the IV
    fn init(&mut self, config: &ModeConfig) -> Result<()>;

    fn current_block_size(&self) -> Result<usize>;

    /// Transform one mode block in the configured direction
    fn update(&mut self, input: &[u8], in_off: usize, out: &mut [u8], out_off: usize)
        -> Result<()>;

    fn reset(&mut self);

    fn self_test(&self) -> bool;
}
