//! Digital Signature Standard (FIPS 186-2)
//!
//! Signatures over the SHA-160 digest of the message in a prime-order
//! subgroup of `Z_p^*`: `r = (g^k mod p) mod q` and
//! `s = k^-1 (h + x r) mod q` for a fresh nonce `k`.

mod codec;
mod keygen;
mod keys;
mod signature;

pub use codec::DssRawCodec;
pub use keygen::{generate_domain, DssKeyPairGenerator};
pub use keys::{DssDomainParams, DssKeyPair, DssPrivateKey, DssPublicKey};
pub use signature::{Dss, DssSignature};
