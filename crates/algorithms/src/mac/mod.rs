//! Message authentication codes

pub mod hmac;
pub mod tmmh16;

pub use hmac::Hmac;
pub use tmmh16::Tmmh16;

use crate::error::Result;
use gcrypto_api::registry::{self, require_self_test};
use gcrypto_api::{MacConfig, MacFunction, MacId};
use std::collections::BTreeSet;

/// Every registered MAC
pub enum Mac {
    Hmac(Hmac),
    Tmmh16(Tmmh16),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Mac::Hmac($inner) => $body,
            Mac::Tmmh16($inner) => $body,
        }
    };
}

impl Mac {
    /// An unkeyed instance
    pub fn new(id: MacId) -> Self {
        match id {
            MacId::Hmac(hash) => Mac::Hmac(Hmac::new(hash)),
            MacId::Tmmh16 => Mac::Tmmh16(Tmmh16::new()),
        }
    }

    pub fn id(&self) -> MacId {
        match self {
            Mac::Hmac(h) => MacId::Hmac(h.hash_id()),
            Mac::Tmmh16(_) => MacId::Tmmh16,
        }
    }
}

impl MacFunction for Mac {
    fn name(&self) -> String {
        dispatch!(self, m => m.name())
    }

    fn mac_size(&self) -> usize {
        dispatch!(self, m => m.mac_size())
    }

    fn init(&mut self, config: MacConfig) -> Result<()> {
        dispatch!(self, m => m.init(config))
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        dispatch!(self, m => m.update(data))
    }

    fn digest(&mut self) -> Result<Vec<u8>> {
        dispatch!(self, m => m.digest())
    }

    fn reset(&mut self) {
        dispatch!(self, m => m.reset())
    }

    fn self_test(&self) -> bool {
        dispatch!(self, m => m.self_test())
    }
}

/// Name-based construction of MACs
pub struct MacFactory;

impl MacFactory {
    /// Resolve `name` and return a self-tested, unkeyed MAC
    ///
    /// `hmac-` combines with any digest name or synonym.
    ///
    /// # Panics
    ///
    /// When the MAC fails its self-test.
    pub fn get_instance(name: &str) -> Option<Mac> {
        let id = registry::resolve_mac(name)?;
        let canonical = id.name();
        tracing::debug!(requested = name, mac = %canonical, "resolved mac");
        let mac = Mac::new(id);
        let passed = mac.self_test();
        Some(require_self_test("mac", &canonical, mac, passed))
    }

    /// Canonical names of every registered MAC
    pub fn names() -> BTreeSet<&'static str> {
        registry::canonical_names(registry::MACS)
    }
}
