//! Per-family case handlers

pub mod digest;
pub mod mac;
pub mod mode;
pub mod pad;
pub mod prng;

use super::error::{EngineError, Result};
use super::model::TestCase;

/// Compare a lowercase hex result with the case's `field`
pub(crate) fn check(case: &TestCase, field: &'static str, actual: String) -> Result<()> {
    let expected = case.field(field)?.to_ascii_lowercase();
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::Mismatch { expected, actual })
    }
}

pub(crate) fn unknown(family: &str, name: &str) -> EngineError {
    EngineError::Unknown {
        family: family.to_string(),
        name: name.to_string(),
    }
}
