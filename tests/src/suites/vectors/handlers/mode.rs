//! Mode of operation cases, run block by block

use super::{check, unknown};
use crate::suites::vectors::error::{EngineError, Result};
use crate::suites::vectors::model::{TestCase, TestGroup};
use gcrypto_algorithms::ModeFactory;
use gcrypto_api::{CipherConfig, CipherMode, Direction, ModeConfig};

pub(crate) fn mode_kat(group: &TestGroup, case: &TestCase) -> Result<()> {
    let cipher = case.field("cipher")?;
    let block_size = case.number("blockSize")?.unwrap_or(16);
    let mut mode = ModeFactory::get_instance(&group.algorithm, &cipher, block_size)
        .ok_or_else(|| unknown("mode", &format!("{}({})", group.algorithm, cipher)))?;

    let direction = match case.field("direction")?.as_str() {
        "encrypt" => Direction::Encryption,
        "decrypt" => Direction::Decryption,
        other => return Err(EngineError::InvalidData(format!("direction {}", other))),
    };
    let mut config =
        ModeConfig::new(CipherConfig::new().with_key(&case.hex("key")?)).with_direction(direction);
    if let Some(iv) = case.optional_hex("iv")? {
        config = config.with_iv(&iv);
    }
    mode.init(&config)?;

    let input = case.hex("input")?;
    let bs = mode.current_block_size()?;
    if input.len() % bs != 0 {
        return Err(EngineError::InvalidData(format!(
            "{} input bytes do not fill {}-byte blocks",
            input.len(),
            bs
        )));
    }
    let mut out = vec![0u8; input.len()];
    for off in (0..input.len()).step_by(bs) {
        mode.update(&input, off, &mut out, off)?;
    }
    check(case, "output", hex::encode(out))
}
