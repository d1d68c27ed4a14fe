//! Block padding schemes

pub mod pkcs7;
pub mod tbc;

pub use pkcs7::Pkcs7;
pub use tbc::Tbc;

use crate::error::{Error, Result};
use gcrypto_api::registry::{self, require_self_test};
use gcrypto_api::{PadId, PaddingScheme};
use std::collections::BTreeSet;

/// Block sizes covered by the round-trip self-test
const SELF_TEST_BLOCK_SIZES: [usize; 6] = [2, 7, 8, 16, 64, 255];

/// Pad and unpad every length up to two blocks at each test block size
fn round_trip_test<P: PaddingScheme + Default>(block_sizes: &[usize]) -> bool {
    block_sizes.iter().all(|&bs| {
        let mut pad = P::default();
        if pad.init(bs).is_err() {
            return false;
        }
        (0..=2 * bs).all(|len| {
            let mut data: Vec<u8> = (0..len).map(|i| (i * 31 + bs) as u8).collect();
            let Ok(padding) = pad.pad(&data) else {
                return false;
            };
            if padding.is_empty() || (len + padding.len()) % bs != 0 {
                return false;
            }
            data.extend_from_slice(&padding);
            matches!(pad.unpad(&data), Ok(n) if n == len)
        })
    })
}

/// Block size of an initialised pad
fn checked_block_size(current: Option<usize>, name: &'static str) -> Result<usize> {
    current.ok_or_else(|| Error::state(name, "padding is not initialised"))
}

/// Every registered padding scheme
#[derive(Clone, Debug)]
pub enum Pad {
    Pkcs7(Pkcs7),
    Tbc(Tbc),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Pad::Pkcs7($inner) => $body,
            Pad::Tbc($inner) => $body,
        }
    };
}

impl Pad {
    pub fn new(id: PadId) -> Self {
        match id {
            PadId::Pkcs7 => Pad::Pkcs7(Pkcs7::new()),
            PadId::Tbc => Pad::Tbc(Tbc::new()),
        }
    }

    pub fn id(&self) -> PadId {
        match self {
            Pad::Pkcs7(_) => PadId::Pkcs7,
            Pad::Tbc(_) => PadId::Tbc,
        }
    }
}

impl PaddingScheme for Pad {
    fn name(&self) -> &'static str {
        dispatch!(self, p => p.name())
    }

    fn init(&mut self, block_size: usize) -> Result<()> {
        dispatch!(self, p => p.init(block_size))
    }

    fn pad(&self, data: &[u8]) -> Result<Vec<u8>> {
        dispatch!(self, p => p.pad(data))
    }

    fn unpad(&self, padded: &[u8]) -> Result<usize> {
        dispatch!(self, p => p.unpad(padded))
    }

    fn reset(&mut self) {
        dispatch!(self, p => p.reset())
    }

    fn self_test(&self) -> bool {
        dispatch!(self, p => p.self_test())
    }
}

/// Name-based construction of padding schemes
pub struct PadFactory;

impl PadFactory {
    /// Resolve `name` and return a self-tested, uninitialised pad
    ///
    /// # Panics
    ///
    /// When the pad fails its self-test.
    pub fn get_instance(name: &str) -> Option<Pad> {
        let id = registry::resolve_pad(name)?;
        tracing::debug!(requested = name, pad = id.name(), "resolved padding scheme");
        let pad = Pad::new(id);
        let passed = pad.self_test();
        Some(require_self_test("pad", id.name(), pad, passed))
    }

    /// Canonical names of every registered pad
    pub fn names() -> BTreeSet<&'static str> {
        registry::canonical_names(registry::PADS)
    }
}

#[cfg(test)]
mod tests;
