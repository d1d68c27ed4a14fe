//! Traditional signature schemes
//!
//! This module contains the discrete-logarithm scheme DSS and the
//! integer-factorisation scheme RSA-PSS.

pub mod dss;
pub mod rsa;

// Re-export DSS types
pub use dss::{Dss, DssKeyPairGenerator, DssRawCodec};

// Re-export RSA types
pub use rsa::{RsaKeyPairGenerator, RsaPss, RsaRawCodec};
