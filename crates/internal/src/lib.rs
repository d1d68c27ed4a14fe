//! Internal utilities shared by the gcrypto crates
//!
//! Not part of the public API; the contents may change without notice.

#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_mask, ct_select, xor_into};
