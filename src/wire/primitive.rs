//! Primitive codecs
//!
//! Length-prefixed strings and fixed-width signed integers.

use bytes::{Buf, BufMut};
use crate::config::CodecConfig;
use crate::error::{MsgError, Result};

/// Width of the byte count in front of every string
pub const STRING_PREFIX_LEN: usize = 4;

/// Width of an encoded int32
pub const INT32_LEN: usize = 4;

/// Encoded size of a string field: prefix + raw bytes
pub fn string_len(value: &str) -> usize {
    STRING_PREFIX_LEN + value.len()
}

// =============================================================================
// Encoding
// =============================================================================

/// Write a signed 32-bit integer
pub fn put_i32<B: BufMut>(buf: &mut B, value: i32) {
    buf.put_i32_le(value);
}

/// Write a length-prefixed string
///
/// Fails when the byte length does not fit the prefix, or exceeds
/// `config.encode_field_limit` when one is set.
pub fn put_string<B: BufMut>(
    buf: &mut B,
    field: &str,
    value: &str,
    config: &CodecConfig,
) -> Result<()> {
    if let Some(limit) = config.encode_field_limit {
        if value.len() > limit {
            return Err(MsgError::Encoding(format!(
                "field `{}` too long: {} bytes (max {})",
                field,
                value.len(),
                limit
            )));
        }
    }

    let len = u32::try_from(value.len()).map_err(|_| {
        MsgError::Encoding(format!(
            "field `{}` length {} does not fit a u32 prefix",
            field,
            value.len()
        ))
    })?;

    buf.put_u32_le(len);
    buf.put_slice(value.as_bytes());
    Ok(())
}

// =============================================================================
// Decoding
// =============================================================================

/// Read a signed 32-bit integer
pub fn get_i32<B: Buf>(buf: &mut B, field: &str) -> Result<i32> {
    if buf.remaining() < INT32_LEN {
        return Err(MsgError::Decoding(format!(
            "field `{}`: expected {} bytes, got {}",
            field,
            INT32_LEN,
            buf.remaining()
        )));
    }
    Ok(buf.get_i32_le())
}

/// Read a length-prefixed string
pub fn get_string<B: Buf>(buf: &mut B, field: &str, config: &CodecConfig) -> Result<String> {
    if buf.remaining() < STRING_PREFIX_LEN {
        return Err(MsgError::Decoding(format!(
            "field `{}`: missing length prefix ({} bytes left)",
            field,
            buf.remaining()
        )));
    }

    let len = buf.get_u32_le() as usize;

    if len > config.max_field_len {
        return Err(MsgError::Decoding(format!(
            "field `{}`: declared length {} exceeds limit {}",
            field, len, config.max_field_len
        )));
    }

    if buf.remaining() < len {
        return Err(MsgError::Decoding(format!(
            "field `{}`: incomplete string (expected {}, got {})",
            field,
            len,
            buf.remaining()
        )));
    }

    let mut raw = vec![0u8; len];
    buf.copy_to_slice(&mut raw);

    String::from_utf8(raw)
        .map_err(|e| MsgError::Decoding(format!("field `{}`: invalid UTF-8: {}", field, e)))
}
