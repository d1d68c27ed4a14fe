//! Message digest cases: `msg` hashed `repeat` times gives `md`

use super::{check, unknown};
use crate::suites::vectors::error::Result;
use crate::suites::vectors::model::{TestCase, TestGroup};
use gcrypto_algorithms::HashFactory;
use gcrypto_api::MessageDigest;

pub(crate) fn digest_kat(group: &TestGroup, case: &TestCase) -> Result<()> {
    let mut hash = HashFactory::get_instance(&group.algorithm)
        .ok_or_else(|| unknown("digest", &group.algorithm))?;
    let msg = case.hex("msg")?;
    for _ in 0..case.number("repeat")?.unwrap_or(1) {
        hash.update(&msg);
    }
    check(case, "md", hex::encode(hash.digest()))
}
