//! Pseudo-random generator cases: `length` bytes drawn after init

use super::{check, unknown};
use crate::suites::vectors::error::{EngineError, Result};
use crate::suites::vectors::model::{TestCase, TestGroup};
use gcrypto_algorithms::PrngFactory;
use gcrypto_api::registry;
use gcrypto_api::{IcmConfig, MdConfig, PrngConfig, PrngId, RandomGenerator};

fn md_config(case: &TestCase) -> Result<PrngConfig> {
    let mut config = MdConfig::new();
    if case.has("hash") {
        let name = case.field("hash")?;
        let hash = registry::resolve_hash(&name).ok_or_else(|| unknown("digest", &name))?;
        config = config.with_hash(hash);
    }
    if let Some(seed) = case.optional_hex("seed")? {
        config = config.with_seed(&seed);
    }
    Ok(PrngConfig::Md(config))
}

fn icm_config(case: &TestCase) -> Result<PrngConfig> {
    let mut config = IcmConfig::new().with_key(&case.hex("key")?);
    if case.has("cipher") {
        let name = case.field("cipher")?;
        let cipher = registry::resolve_cipher(&name).ok_or_else(|| unknown("cipher", &name))?;
        config = config.with_cipher(cipher);
    }
    if let Some(offset) = case.optional_hex("offset")? {
        config = config.with_offset(&offset);
    }
    if let Some(segment) = case.number("segmentIndex")? {
        config = config.with_segment_index(segment as u64);
    }
    if let Some(len) = case.number("blockIndexLen")? {
        config = config.with_block_index_len(len);
    }
    if let Some(len) = case.number("segmentIndexLen")? {
        config = config.with_segment_index_len(len);
    }
    Ok(PrngConfig::Icm(config))
}

pub(crate) fn prng_kat(group: &TestGroup, case: &TestCase) -> Result<()> {
    let mut prng = PrngFactory::get_instance(&group.algorithm)
        .ok_or_else(|| unknown("prng", &group.algorithm))?;
    let config = match prng.id() {
        PrngId::Md => md_config(case)?,
        PrngId::Icm => icm_config(case)?,
    };
    prng.init(&config)?;

    let length = case.number("length")?.ok_or(EngineError::MissingField("length"))?;
    let mut out = vec![0u8; length];
    prng.fill(&mut out)?;
    check(case, "output", hex::encode(out))
}
