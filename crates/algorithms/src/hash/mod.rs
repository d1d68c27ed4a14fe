//! Message digests
//!
//! All supported digests share the Merkle-Damgård shape over 64-byte
//! blocks. [`Engine`] owns buffering, length padding and state export;
//! each algorithm only supplies its compression function through
//! [`HashAlgorithm`].

pub mod md4;
pub mod md5;
pub mod ripemd128;
pub mod ripemd160;
pub mod sha1;
pub mod sha256;
pub mod whirlpool;

pub use md4::Md4;
pub use md5::Md5;
pub use ripemd128::Ripemd128;
pub use ripemd160::Ripemd160;
pub use sha1::Sha160;
pub use sha256::Sha256;
pub use whirlpool::Whirlpool;

use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use gcrypto_api::registry::{self, require_self_test};
use gcrypto_api::{HashId, HashState, MessageDigest};
use gcrypto_params::utils::hash::MD_BLOCK_SIZE;
use std::collections::BTreeSet;
use zeroize::Zeroize;

/// Compression function and framing constants of one digest
pub trait HashAlgorithm: Clone + Default + Zeroize {
    /// Canonical registry name
    const ALGORITHM_ID: &'static str;
    const OUTPUT_SIZE: usize;
    /// Width of the trailing message-length field in bytes
    const LENGTH_FIELD: usize = 8;
    /// Byte order of message words and of the length field
    const BIG_ENDIAN: bool;
    /// Input and hex digest checked by `self_test`
    const SELF_TEST: (&'static [u8], &'static str);

    fn compress(&mut self, block: &[u8; MD_BLOCK_SIZE]);

    /// Serialized chaining value; the digest is its first `OUTPUT_SIZE` bytes
    fn chaining(&self) -> Vec<u8>;

    fn load_chaining(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Buffered driver around a compression function
#[derive(Clone)]
pub struct Engine<A: HashAlgorithm> {
    core: A,
    buffer: [u8; MD_BLOCK_SIZE],
    buffer_len: usize,
    total_bytes: u64,
}

impl<A: HashAlgorithm> Default for Engine<A> {
    fn default() -> Self {
        Self {
            core: A::default(),
            buffer: [0u8; MD_BLOCK_SIZE],
            buffer_len: 0,
            total_bytes: 0,
        }
    }
}

impl<A: HashAlgorithm> Engine<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `data` in one call
    pub fn hash(data: &[u8]) -> Vec<u8> {
        let mut engine = Self::new();
        engine.update(data);
        engine.digest()
    }

    fn absorb(&mut self, mut data: &[u8]) {
        if self.buffer_len > 0 {
            let take = (MD_BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];
            if self.buffer_len < MD_BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.core.compress(&block);
            self.buffer_len = 0;
        }
        let mut blocks = data.chunks_exact(MD_BLOCK_SIZE);
        for block in &mut blocks {
            let mut b = [0u8; MD_BLOCK_SIZE];
            b.copy_from_slice(block);
            self.core.compress(&b);
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    fn padding(&self) -> Vec<u8> {
        let field = A::LENGTH_FIELD;
        let target = MD_BLOCK_SIZE - field;
        let zeros = if self.buffer_len < target {
            target - self.buffer_len - 1
        } else {
            MD_BLOCK_SIZE + target - self.buffer_len - 1
        };
        let mut pad = vec![0u8; 1 + zeros + field];
        pad[0] = 0x80;

        let length = &mut pad[1 + zeros..];
        let bits = (self.total_bytes as u128) * 8;
        match (field, A::BIG_ENDIAN) {
            (8, true) => BigEndian::write_u64(length, bits as u64),
            (8, false) => LittleEndian::write_u64(length, bits as u64),
            // wider fields are big-endian with the count in the low 128 bits
            _ => BigEndian::write_u128(&mut length[field - 16..], bits),
        }
        pad
    }
}

impl<A: HashAlgorithm> Drop for Engine<A> {
    fn drop(&mut self) {
        self.core.zeroize();
        self.buffer.zeroize();
    }
}

impl<A: HashAlgorithm> MessageDigest for Engine<A> {
    fn name(&self) -> &'static str {
        A::ALGORITHM_ID
    }

    fn hash_size(&self) -> usize {
        A::OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        MD_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) {
        self.total_bytes = self.total_bytes.wrapping_add(data.len() as u64);
        self.absorb(data);
    }

    fn digest(&mut self) -> Vec<u8> {
        let pad = self.padding();
        self.absorb(&pad);
        debug_assert_eq!(self.buffer_len, 0);
        let mut out = self.core.chaining();
        out.truncate(A::OUTPUT_SIZE);
        self.reset();
        out
    }

    fn reset(&mut self) {
        self.core.zeroize();
        self.core = A::default();
        self.buffer.zeroize();
        self.buffer_len = 0;
        self.total_bytes = 0;
    }

    fn snapshot(&self) -> HashState {
        HashState {
            algorithm: A::ALGORITHM_ID,
            chaining: self.core.chaining(),
            buffer: self.buffer[..self.buffer_len].to_vec(),
            count: self.total_bytes,
        }
    }

    fn restore(&mut self, state: &HashState) -> Result<()> {
        if state.algorithm != A::ALGORITHM_ID {
            return Err(Error::param(
                "hash state",
                format!("state of {} given to {}", state.algorithm, A::ALGORITHM_ID),
            ));
        }
        if state.buffer.len() >= MD_BLOCK_SIZE
            || (state.count % MD_BLOCK_SIZE as u64) as usize != state.buffer.len()
        {
            return Err(Error::param("hash state", "buffer does not match the byte count"));
        }
        let mut core = A::default();
        core.load_chaining(&state.chaining)?;

        self.core = core;
        self.buffer = [0u8; MD_BLOCK_SIZE];
        self.buffer[..state.buffer.len()].copy_from_slice(&state.buffer);
        self.buffer_len = state.buffer.len();
        self.total_bytes = state.count;
        Ok(())
    }

    fn self_test(&self) -> bool {
        let (input, expected) = A::SELF_TEST;
        hex::encode(Self::hash(input)) == expected
    }
}

/// Serialize chaining words in the given byte order
pub(crate) fn encode_words(words: &[u32], big_endian: bool) -> Vec<u8> {
    let mut out = vec![0u8; words.len() * 4];
    if big_endian {
        BigEndian::write_u32_into(words, &mut out);
    } else {
        LittleEndian::write_u32_into(words, &mut out);
    }
    out
}

/// Inverse of [`encode_words`]; the length must match exactly
pub(crate) fn decode_words(bytes: &[u8], words: &mut [u32], big_endian: bool) -> Result<()> {
    if bytes.len() != words.len() * 4 {
        return Err(Error::InvalidLength {
            context: "hash chaining value",
            expected: words.len() * 4,
            actual: bytes.len(),
        });
    }
    if big_endian {
        BigEndian::read_u32_into(bytes, words);
    } else {
        LittleEndian::read_u32_into(bytes, words);
    }
    Ok(())
}

/// Every registered message digest
#[derive(Clone)]
pub enum Hash {
    Md4(Md4),
    Md5(Md5),
    Sha160(Sha160),
    Sha256(Sha256),
    Ripemd128(Ripemd128),
    Ripemd160(Ripemd160),
    Whirlpool(Whirlpool),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Hash::Md4($inner) => $body,
            Hash::Md5($inner) => $body,
            Hash::Sha160($inner) => $body,
            Hash::Sha256($inner) => $body,
            Hash::Ripemd128($inner) => $body,
            Hash::Ripemd160($inner) => $body,
            Hash::Whirlpool($inner) => $body,
        }
    };
}

impl Hash {
    /// A fresh instance with no input absorbed
    pub fn new(id: HashId) -> Self {
        match id {
            HashId::Md4 => Hash::Md4(Md4::new()),
            HashId::Md5 => Hash::Md5(Md5::new()),
            HashId::Sha160 => Hash::Sha160(Sha160::new()),
            HashId::Sha256 => Hash::Sha256(Sha256::new()),
            HashId::Ripemd128 => Hash::Ripemd128(Ripemd128::new()),
            HashId::Ripemd160 => Hash::Ripemd160(Ripemd160::new()),
            HashId::Whirlpool => Hash::Whirlpool(Whirlpool::new()),
        }
    }

    pub fn id(&self) -> HashId {
        match self {
            Hash::Md4(_) => HashId::Md4,
            Hash::Md5(_) => HashId::Md5,
            Hash::Sha160(_) => HashId::Sha160,
            Hash::Sha256(_) => HashId::Sha256,
            Hash::Ripemd128(_) => HashId::Ripemd128,
            Hash::Ripemd160(_) => HashId::Ripemd160,
            Hash::Whirlpool(_) => HashId::Whirlpool,
        }
    }
}

impl MessageDigest for Hash {
    fn name(&self) -> &'static str {
        dispatch!(self, h => h.name())
    }

    fn hash_size(&self) -> usize {
        dispatch!(self, h => h.hash_size())
    }

    fn block_size(&self) -> usize {
        dispatch!(self, h => h.block_size())
    }

    fn update(&mut self, data: &[u8]) {
        dispatch!(self, h => h.update(data))
    }

    fn digest(&mut self) -> Vec<u8> {
        dispatch!(self, h => h.digest())
    }

    fn reset(&mut self) {
        dispatch!(self, h => h.reset())
    }

    fn snapshot(&self) -> HashState {
        dispatch!(self, h => h.snapshot())
    }

    fn restore(&mut self, state: &HashState) -> Result<()> {
        dispatch!(self, h => h.restore(state))
    }

    fn self_test(&self) -> bool {
        dispatch!(self, h => h.self_test())
    }
}

/// Name-based construction of message digests
pub struct HashFactory;

impl HashFactory {
    /// Resolve `name` and return a self-tested, empty instance
    ///
    /// # Panics
    ///
    /// When the resolved digest fails its self-test.
    pub fn get_instance(name: &str) -> Option<Hash> {
        let id = registry::resolve_hash(name)?;
        tracing::debug!(requested = name, hash = id.name(), "resolved message digest");
        let hash = Hash::new(id);
        let passed = hash.self_test();
        Some(require_self_test("hash", id.name(), hash, passed))
    }

    /// Canonical names of every registered digest
    pub fn names() -> BTreeSet<&'static str> {
        registry::canonical_names(registry::HASHES)
    }
}

#[cfg(test)]
mod tests;
