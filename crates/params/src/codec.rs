//! Tags of the raw key and signature encoding

/// Version byte following every magic tag
pub const RAW_FORMAT_VERSION: u8 = 0x01;

/// Width of each length prefix in bytes
pub const RAW_LENGTH_PREFIX: usize = 4;

/// DSS public key: p, q, g, y
pub const MAGIC_RAW_DSS_PUBLIC_KEY: [u8; 4] = [0x47, 0x53, 0x44, 0x42];

/// DSS private key: p, q, g, x
pub const MAGIC_RAW_DSS_PRIVATE_KEY: [u8; 4] = [0x47, 0x53, 0x44, 0x41];

/// DSS signature: r, s
pub const MAGIC_RAW_DSS_SIGNATURE: [u8; 4] = [0x47, 0x4E, 0x55, 0x42];

/// RSA public key: n, e
pub const MAGIC_RAW_RSA_PUBLIC_KEY: [u8; 4] = [0x47, 0x4E, 0x55, 0x43];

/// RSA private key: p, q, e, d
pub const MAGIC_RAW_RSA_PRIVATE_KEY: [u8; 4] = [0x47, 0x4E, 0x55, 0x63];

/// RSA-PSS signature: one octet string
pub const MAGIC_RAW_RSA_PSS_SIGNATURE: [u8; 4] = [0x47, 0x4E, 0x55, 0x44];
