//! Symmetric primitives and multi-precision arithmetic for gcrypto
//!
//! Every family has a closed enum of its implementations (`Cipher`,
//! `Mode`, `Hash`, `Mac`, `Pad`, `Prng`) and a factory that resolves a
//! name, runs the instance's self-test and hands it out.

#![forbid(unsafe_code)]

pub use gcrypto_api::error;
pub use gcrypto_api::{Error, Result};

pub mod bignum;
pub mod block;
pub mod hash;
pub mod mac;
pub mod pad;
pub mod prng;

pub use bignum::BigNum;
pub use block::modes::{Mode, ModeFactory};
pub use block::{Cipher, CipherFactory};
pub use hash::{Hash, HashFactory};
pub use mac::{Mac, MacFactory};
pub use pad::{Pad, PadFactory};
pub use prng::{Prng, PrngFactory};
