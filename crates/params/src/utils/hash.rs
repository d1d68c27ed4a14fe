//! Constants for hash functions

/// Compression block size shared by every supported digest
pub const MD_BLOCK_SIZE: usize = 64;

/// Output size of MD4 in bytes
pub const MD4_OUTPUT_SIZE: usize = 16;

/// Output size of MD5 in bytes
pub const MD5_OUTPUT_SIZE: usize = 16;

/// Output size of SHA-160 in bytes
pub const SHA160_OUTPUT_SIZE: usize = 20;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of RIPEMD-128 in bytes
pub const RIPEMD128_OUTPUT_SIZE: usize = 16;

/// Output size of RIPEMD-160 in bytes
pub const RIPEMD160_OUTPUT_SIZE: usize = 20;

/// Output size of Whirlpool in bytes
pub const WHIRLPOOL_OUTPUT_SIZE: usize = 64;

/// Whirlpool appends a 256-bit message length
pub const WHIRLPOOL_LENGTH_FIELD: usize = 32;

/// Number of Whirlpool rounds
pub const WHIRLPOOL_ROUNDS: usize = 10;
