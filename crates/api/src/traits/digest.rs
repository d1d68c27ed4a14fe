//! Message digest and MAC contracts

use crate::config::MacConfig;
use crate::error::validate;
use crate::types::HashState;
use crate::Result;

/// Incremental hash function
///
/// `digest` finishes the computation and resets the instance. Cloning an
/// instance forks its state; both copies then finish independently.
pub trait MessageDigest: Clone {
    fn name(&self) -> &'static str;

    /// Output length in bytes
    fn hash_size(&self) -> usize;

    /// Compression block length in bytes
    fn block_size(&self) -> usize;

    fn update_byte(&mut self, byte: u8) {
        self.update(&[byte]);
    }

    fn update(&mut self, data: &[u8]);

    /// Finish, return the hash and reset
    fn digest(&mut self) -> Vec<u8>;

    /// Finish into `out[offset..offset + length]`, returning the bytes written
    ///
    /// # Errors
    ///
    /// `InvalidLength` when `length` is shorter than the hash; the instance is
    /// left untouched in that case.
    fn digest_into(&mut self, out: &mut [u8], offset: usize, length: usize) -> Result<usize> {
        validate::min_length("digest output", length, self.hash_size())?;
        validate::window("digest output", out.len(), offset, length)?;
        let hash = self.digest();
        out[offset..offset + hash.len()].copy_from_slice(&hash);
        Ok(hash.len())
    }

    fn reset(&mut self);

    /// Export the chaining state
    fn snapshot(&self) -> HashState;

    /// Replace the chaining state with one exported by the same algorithm
    fn restore(&mut self, state: &HashState) -> Result<()>;

    /// Known-answer test
    fn self_test(&self) -> bool;
}

/// Keyed message authentication code
pub trait MacFunction {
    fn name(&self) -> String;

    /// Output length in bytes after truncation
    fn mac_size(&self) -> usize;

    /// Key the MAC, discarding any previous key and absorbed input
    ///
    /// # Errors
    ///
    /// - `InvalidKey` when the key or keystream is missing
    /// - `InvalidParameter` when the tag length is out of range
    fn init(&mut self, config: MacConfig) -> Result<()>;

    fn update_byte(&mut self, byte: u8) -> Result<()> {
        self.update(&[byte])
    }

    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finish, return the tag and reset for the next message under the same key
    fn digest(&mut self) -> Result<Vec<u8>>;

    /// Finish into `out[offset..offset + length]`, returning the bytes written
    fn digest_into(&mut self, out: &mut [u8], offset: usize, length: usize) -> Result<usize> {
        validate::min_length("mac output", length, self.mac_size())?;
        validate::window("mac output", out.len(), offset, length)?;
        let tag = self.digest()?;
        out[offset..offset + tag.len()].copy_from_slice(&tag);
        Ok(tag.len())
    }

    /// Forget the absorbed input, keeping the key
    fn reset(&mut self);

    fn self_test(&self) -> bool;
}
