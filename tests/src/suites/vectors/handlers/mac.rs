//! Keyed MAC cases, optionally truncated through `tagLen`

use super::{check, unknown};
use crate::suites::vectors::error::Result;
use crate::suites::vectors::model::{TestCase, TestGroup};
use gcrypto_algorithms::MacFactory;
use gcrypto_api::{MacConfig, MacFunction};

pub(crate) fn mac_kat(group: &TestGroup, case: &TestCase) -> Result<()> {
    let mut mac =
        MacFactory::get_instance(&group.algorithm).ok_or_else(|| unknown("mac", &group.algorithm))?;
    let mut config = MacConfig::new().with_key(&case.hex("key")?);
    if let Some(tag_len) = case.number("tagLen")? {
        config = config.with_tag_len(tag_len);
    }
    mac.init(config)?;
    mac.update(&case.hex("msg")?)?;
    check(case, "mac", hex::encode(mac.digest()?))
}
