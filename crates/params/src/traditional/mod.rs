//! Constants for traditional public-key algorithms

pub mod dss;
pub mod rsa;
