//! Stream framing
//!
//! Blocking helpers that move one size-prefixed message over a byte stream.

use std::io::{Read, Write};
use bytes::BufMut;
use crate::config::CodecConfig;
use crate::error::{MsgError, Result};
use crate::message::RosMessage;

/// Frame header size: 4 byte message length
pub const FRAME_HEADER_LEN: usize = 4;

/// Write a message to a stream
pub fn write_message<W: Write, M: RosMessage>(writer: &mut W, message: &M) -> Result<()> {
    write_message_with(writer, message, &CodecConfig::default())
}

pub fn write_message_with<W: Write, M: RosMessage>(
    writer: &mut W,
    message: &M,
    config: &CodecConfig,
) -> Result<()> {
    let body_len = message.encoded_len();
    if body_len > config.max_message_len {
        return Err(MsgError::Encoding(format!(
            "{} too large: {} bytes (max {})",
            M::DATATYPE,
            body_len,
            config.max_message_len
        )));
    }
    let len = u32::try_from(body_len).map_err(|_| {
        MsgError::Encoding(format!("{} size {} does not fit a u32", M::DATATYPE, body_len))
    })?;

    let mut frame = Vec::with_capacity(FRAME_HEADER_LEN + body_len);
    frame.put_u32_le(len);
    message.encode_into(&mut frame, config)?;

    writer.write_all(&frame)?;
    writer.flush()?;
    Ok(())
}

/// Read a complete message from a stream
///
/// Blocks until the whole frame is received or an error occurs
pub fn read_message<R: Read, M: RosMessage>(reader: &mut R) -> Result<M> {
    read_message_with(reader, &CodecConfig::default())
}

pub fn read_message_with<R: Read, M: RosMessage>(
    reader: &mut R,
    config: &CodecConfig,
) -> Result<M> {
    let mut header = [0u8; FRAME_HEADER_LEN];
    reader.read_exact(&mut header)?;

    let body_len = u32::from_le_bytes(header) as usize;
    if body_len > config.max_message_len {
        return Err(MsgError::Decoding(format!(
            "{} frame too large: {} bytes (max {})",
            M::DATATYPE,
            body_len,
            config.max_message_len
        )));
    }

    let mut body = vec![0u8; body_len];
    reader.read_exact(&mut body)?;

    let (message, consumed) = M::decode_with(&body, 0, config)?;
    if consumed != body_len {
        return Err(MsgError::Decoding(format!(
            "{} frame has {} trailing bytes",
            M::DATATYPE,
            body_len - consumed
        )));
    }

    Ok(message)
}
