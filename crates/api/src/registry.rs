//! Compile-time name registry
//!
//! Each family is a table of `(canonical, synonyms, id)` rows. Lookups trim
//! the requested name and compare case-insensitively against the canonical
//! name and every synonym; unknown names resolve to `None`.

use crate::types::{CipherId, HashId, KeyPairId, MacId, ModeId, PadId, PrngId, SignatureId};
use std::collections::BTreeSet;

/// One registry row
#[derive(Debug, Clone, Copy)]
pub struct Entry<T> {
    pub canonical: &'static str,
    pub synonyms: &'static [&'static str],
    pub id: T,
}

impl<T> Entry<T> {
    /// True when `name` is the canonical name or one of the synonyms
    pub fn matches(&self, name: &str) -> bool {
        self.canonical.eq_ignore_ascii_case(name)
            || self.synonyms.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

const fn entry<T>(canonical: &'static str, synonyms: &'static [&'static str], id: T) -> Entry<T> {
    Entry {
        canonical,
        synonyms,
        id,
    }
}

pub const CIPHERS: &[Entry<CipherId>] = &[
    entry("aes", &["rijndael", "rijndael-128"], CipherId::Aes),
    entry("null", &[], CipherId::Null),
    entry("serpent", &[], CipherId::Serpent),
];

pub const HASHES: &[Entry<HashId>] = &[
    entry("md4", &[], HashId::Md4),
    entry("md5", &[], HashId::Md5),
    entry("sha-160", &["sha-1", "sha1", "sha"], HashId::Sha160),
    entry("sha-256", &["sha256"], HashId::Sha256),
    entry("ripemd128", &["ripemd-128"], HashId::Ripemd128),
    entry("ripemd160", &["ripemd-160"], HashId::Ripemd160),
    entry("whirlpool", &[], HashId::Whirlpool),
];

pub const MACS: &[Entry<MacId>] = &[
    entry("hmac-md4", &[], MacId::Hmac(HashId::Md4)),
    entry("hmac-md5", &[], MacId::Hmac(HashId::Md5)),
    entry("hmac-sha-160", &[], MacId::Hmac(HashId::Sha160)),
    entry("hmac-sha-256", &[], MacId::Hmac(HashId::Sha256)),
    entry("hmac-ripemd128", &[], MacId::Hmac(HashId::Ripemd128)),
    entry("hmac-ripemd160", &[], MacId::Hmac(HashId::Ripemd160)),
    entry("hmac-whirlpool", &[], MacId::Hmac(HashId::Whirlpool)),
    entry("tmmh16", &[], MacId::Tmmh16),
];

pub const PADS: &[Entry<PadId>] = &[
    entry("pkcs7", &[], PadId::Pkcs7),
    entry("tbc", &[], PadId::Tbc),
];

pub const PRNGS: &[Entry<PrngId>] = &[
    entry("md", &[], PrngId::Md),
    entry("icm", &[], PrngId::Icm),
];

pub const MODES: &[Entry<ModeId>] = &[
    entry("ecb", &[], ModeId::Ecb),
    entry("ctr", &[], ModeId::Ctr),
    entry("icm", &[], ModeId::Icm),
    entry("ofb", &[], ModeId::Ofb),
];

pub const SIGNATURES: &[Entry<SignatureId>] = &[
    entry("dss", &["dsa"], SignatureId::Dss),
    entry("rsa-pss", &[], SignatureId::RsaPss),
];

pub const KEY_PAIRS: &[Entry<KeyPairId>] = &[
    entry("dss", &["dsa"], KeyPairId::Dss),
    entry("rsa", &[], KeyPairId::Rsa),
];

/// Resolve `name` against `table`
pub fn lookup<T: Copy>(table: &[Entry<T>], name: &str) -> Option<T> {
    let name = name.trim();
    table.iter().find(|e| e.matches(name)).map(|e| e.id)
}

/// Canonical names of a table, synonyms excluded
pub fn canonical_names<T>(table: &[Entry<T>]) -> BTreeSet<&'static str> {
    table.iter().map(|e| e.canonical).collect()
}

pub fn resolve_cipher(name: &str) -> Option<CipherId> {
    lookup(CIPHERS, name)
}

pub fn resolve_hash(name: &str) -> Option<HashId> {
    lookup(HASHES, name)
}

/// Resolve a MAC name
///
/// `hmac-` followed by any digest name or synonym selects HMAC over that
/// digest, so `hmac-sha1` and `hmac-sha-160` are the same algorithm.
pub fn resolve_mac(name: &str) -> Option<MacId> {
    let name = name.trim();
    if let Some(found) = lookup(MACS, name) {
        return Some(found);
    }
    let prefix = "hmac-";
    match name.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => {
            resolve_hash(&name[prefix.len()..]).map(MacId::Hmac)
        }
        _ => None,
    }
}

pub fn resolve_pad(name: &str) -> Option<PadId> {
    lookup(PADS, name)
}

pub fn resolve_prng(name: &str) -> Option<PrngId> {
    lookup(PRNGS, name)
}

pub fn resolve_mode(name: &str) -> Option<ModeId> {
    lookup(MODES, name)
}

pub fn resolve_signature(name: &str) -> Option<SignatureId> {
    lookup(SIGNATURES, name)
}

pub fn resolve_key_pair(name: &str) -> Option<KeyPairId> {
    lookup(KEY_PAIRS, name)
}

/// Gate an instance on its conformance self-test
///
/// Factories hand out an instance only after it has passed; a failure means
/// the implementation itself is broken, so the process is aborted with a
/// panic instead of returning an error.
pub fn require_self_test<T>(family: &'static str, name: &str, instance: T, passed: bool) -> T {
    if !passed {
        tracing::error!(family, name, "self-test failed");
        panic!("{} {} failed its self-test", family, name);
    }
    tracing::debug!(family, name, "self-test passed");
    instance
}
