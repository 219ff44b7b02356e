//! Message traits
//!
//! Metadata and codec entry points shared by the request and response types.

use bytes::{Buf, BufMut};
use crate::config::CodecConfig;
use crate::error::{MsgError, Result};

/// Checksum a peer may send to skip the compatibility check
pub const WILDCARD_MD5SUM: &str = "*";

/// A message with a fixed wire layout
pub trait RosMessage: Sized {
    /// Fully qualified type name, e.g. `pkg/Name`
    const DATATYPE: &'static str;

    /// Schema checksum, compared for equality between endpoints
    const MD5SUM: &'static str;

    /// Schema text, one `type name` per line
    const DEFINITION: &'static str;

    /// Exact number of bytes `encode` produces
    fn encoded_len(&self) -> usize;

    /// Append the fields to `buf` in wire order
    fn encode_into<B: BufMut>(&self, buf: &mut B, config: &CodecConfig) -> Result<()>;

    /// Read the fields from `buf` in wire order
    fn decode_from<B: Buf>(buf: &mut B, config: &CodecConfig) -> Result<Self>;

    /// Encode with the default limits
    fn encode(&self) -> Result<Vec<u8>> {
        self.encode_with(&CodecConfig::default())
    }

    fn encode_with(&self, config: &CodecConfig) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out, config)?;
        tracing::trace!(datatype = Self::DATATYPE, len = out.len(), "encoded message");
        Ok(out)
    }

    /// Decode starting at `offset`
    ///
    /// Returns the message and the offset just past it.
    fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize)> {
        Self::decode_with(bytes, offset, &CodecConfig::default())
    }

    fn decode_with(bytes: &[u8], offset: usize, config: &CodecConfig) -> Result<(Self, usize)> {
        let mut rest = bytes.get(offset..).ok_or_else(|| {
            MsgError::Decoding(format!(
                "offset {} is past the end of a {} byte buffer",
                offset,
                bytes.len()
            ))
        })?;
        let available = rest.len();

        let message = Self::decode_from(&mut rest, config).map_err(|e| {
            tracing::debug!(datatype = Self::DATATYPE, offset, error = %e, "decode failed");
            e
        })?;

        let new_offset = offset + (available - rest.len());
        tracing::trace!(datatype = Self::DATATYPE, offset, new_offset, "decoded message");
        Ok((message, new_offset))
    }

    /// Whether a peer advertising `remote_md5` speaks this schema
    fn is_compatible(remote_md5: &str) -> bool {
        checksum_matches(Self::MD5SUM, remote_md5)
    }
}

/// A request/response pair exchanged for one remote call
pub trait RosService {
    const DATATYPE: &'static str;
    const MD5SUM: &'static str;

    type Request: RosMessage;
    type Response: RosMessage;

    fn is_compatible(remote_md5: &str) -> bool {
        checksum_matches(Self::MD5SUM, remote_md5)
    }
}

fn checksum_matches(local: &str, remote: &str) -> bool {
    remote == WILDCARD_MD5SUM || remote == local
}
