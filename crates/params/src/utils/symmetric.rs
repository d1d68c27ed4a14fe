//! Constants for block ciphers, MACs and generators

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Serpent block size in bytes
pub const SERPENT_BLOCK_SIZE: usize = 16;

/// Serpent key sizes in bytes; shorter keys are padded by the key schedule
pub const SERPENT_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Serpent round count
pub const SERPENT_ROUNDS: usize = 32;

/// Block sizes accepted by the null cipher
pub const NULL_BLOCK_SIZES: [usize; 3] = [16, 24, 32];

/// Smallest null cipher key in bytes
pub const NULL_MIN_KEY_SIZE: usize = 8;

/// Largest null cipher key in bytes
pub const NULL_MAX_KEY_SIZE: usize = 63;

/// HMAC inner pad byte
pub const HMAC_IPAD: u8 = 0x36;

/// HMAC outer pad byte
pub const HMAC_OPAD: u8 = 0x5c;

/// Shortest HMAC truncation allowed, in bytes
pub const HMAC_MIN_TAG_LEN: usize = 10;

/// Longest TMMH16 tag in bytes
pub const TMMH16_MAX_TAG_LEN: usize = 64;

/// TMMH16 final reduction modulus, the Fermat prime 2^16 + 1
pub const TMMH16_P: u64 = 65_537;

/// Largest block size a PKCS#7 pad byte can express
pub const PKCS7_MAX_BLOCK_SIZE: usize = 255;

/// Largest block size accepted by the trailing bit complement pad
pub const TBC_MAX_BLOCK_SIZE: usize = 256;
