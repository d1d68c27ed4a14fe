//! Constants for RSA

/// Default modulus length in bits
pub const RSA_DEFAULT_MODULUS_BITS: usize = 1024;

/// Smallest modulus length in bits
pub const RSA_MIN_MODULUS_BITS: usize = 1024;

/// Public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u64 = 65537;

/// PSS salt length used when none is configured
pub const RSA_PSS_DEFAULT_SALT_LEN: usize = 0;

/// Trailer byte of an EMSA-PSS encoded message
pub const RSA_PSS_TRAILER: u8 = 0xbc;
