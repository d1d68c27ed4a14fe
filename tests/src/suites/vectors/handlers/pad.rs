//! Padding cases
//!
//! A case with `padded` checks the recovered length; otherwise the
//! padding produced for `msg` is compared and then stripped again.

use super::{check, unknown};
use crate::suites::vectors::error::{EngineError, Result};
use crate::suites::vectors::model::{TestCase, TestGroup};
use gcrypto_algorithms::PadFactory;
use gcrypto_api::PaddingScheme;

pub(crate) fn pad_kat(group: &TestGroup, case: &TestCase) -> Result<()> {
    let mut pad =
        PadFactory::get_instance(&group.algorithm).ok_or_else(|| unknown("pad", &group.algorithm))?;
    let block_size = case
        .number("blockSize")?
        .ok_or(EngineError::MissingField("blockSize"))?;
    pad.init(block_size)?;

    if let Some(padded) = case.optional_hex("padded")? {
        let len = pad.unpad(&padded)?;
        return check(case, "length", len.to_string());
    }

    let msg = case.hex("msg")?;
    let padding = pad.pad(&msg)?;
    check(case, "padding", hex::encode(&padding))?;

    let mut whole = msg.clone();
    whole.extend_from_slice(&padding);
    let recovered = pad.unpad(&whole)?;
    if recovered != msg.len() {
        return Err(EngineError::Mismatch {
            expected: msg.len().to_string(),
            actual: recovered.to_string(),
        });
    }
    Ok(())
}
