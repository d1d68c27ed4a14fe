//! Constants for symmetric primitives

pub mod hash;
pub mod symmetric;
