//! Raw key and signature encoding
//!
//! Every encoded object starts with a 4-byte magic tag and a version byte.
//! Fields follow as a 4-byte big-endian length and that many bytes.
//! Integers are written as minimal two's-complement big-endian values, so a
//! magnitude whose top bit is set gains a leading zero byte. Readers accept
//! any unsigned big-endian magnitude.

use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder};
use gcrypto_algorithms::BigNum;
use gcrypto_params::codec::{RAW_FORMAT_VERSION, RAW_LENGTH_PREFIX};

/// Builder for one raw-encoded object
pub(crate) struct RawWriter {
    context: &'static str,
    out: Vec<u8>,
}

impl RawWriter {
    pub(crate) fn new(context: &'static str, magic: [u8; 4]) -> Self {
        let mut out = Vec::with_capacity(64);
        out.extend_from_slice(&magic);
        out.push(RAW_FORMAT_VERSION);
        Self { context, out }
    }

    /// Append an unsigned integer
    pub(crate) fn integer(self, value: &BigNum) -> Result<Self> {
        let mut bytes = value.to_bytes_be();
        if bytes.is_empty() || bytes[0] & 0x80 != 0 {
            bytes.insert(0, 0);
        }
        self.octets(&bytes)
    }

    /// Append an opaque octet string
    pub(crate) fn octets(mut self, bytes: &[u8]) -> Result<Self> {
        let len = u32::try_from(bytes.len())
            .map_err(|_| Error::param(self.context, "field does not fit a length prefix"))?;
        let mut prefix = [0u8; RAW_LENGTH_PREFIX];
        BigEndian::write_u32(&mut prefix, len);
        self.out.extend_from_slice(&prefix);
        self.out.extend_from_slice(bytes);
        Ok(self)
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.out
    }
}

/// Cursor over one raw-encoded object
pub(crate) struct RawReader<'a> {
    context: &'static str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> RawReader<'a> {
    /// Check the magic tag and version and position the cursor on the first field
    ///
    /// The magic is compared before anything else is looked at.
    pub(crate) fn new(context: &'static str, magic: [u8; 4], bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < magic.len() {
            return Err(Error::corrupt(context, "input ends inside the magic tag"));
        }
        if bytes[..magic.len()] != magic {
            return Err(Error::param(
                context,
                format!("unexpected magic tag {:02x?}", &bytes[..magic.len()]),
            ));
        }
        let version = *bytes
            .get(magic.len())
            .ok_or_else(|| Error::corrupt(context, "input ends before the version byte"))?;
        if version != RAW_FORMAT_VERSION {
            return Err(Error::param(
                context,
                format!("unsupported format version {}", version),
            ));
        }
        Ok(Self {
            context,
            bytes,
            pos: magic.len() + 1,
        })
    }

    pub(crate) fn octets(&mut self) -> Result<&'a [u8]> {
        let rest = &self.bytes[self.pos..];
        if rest.len() < RAW_LENGTH_PREFIX {
            return Err(Error::corrupt(self.context, "input ends inside a length prefix"));
        }
        let len = BigEndian::read_u32(&rest[..RAW_LENGTH_PREFIX]) as usize;
        let body = &rest[RAW_LENGTH_PREFIX..];
        if body.len() < len {
            return Err(Error::corrupt(
                self.context,
                format!("field of {} bytes truncated to {}", len, body.len()),
            ));
        }
        self.pos += RAW_LENGTH_PREFIX + len;
        Ok(&body[..len])
    }

    pub(crate) fn integer(&mut self) -> Result<BigNum> {
        Ok(BigNum::from_bytes_be(self.octets()?))
    }

    /// Reject trailing bytes after the last field
    pub(crate) fn finish(self) -> Result<()> {
        let extra = self.bytes.len() - self.pos;
        if extra != 0 {
            return Err(Error::corrupt(
                self.context,
                format!("{} trailing bytes after the last field", extra),
            ));
        }
        Ok(())
    }
}
