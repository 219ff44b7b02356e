//! Wire Module
//!
//! Primitive codecs shared by every message, plus stream framing.
//!
//! ## Primitive Layout
//!
//! All integers are little-endian, fields are packed with no padding.
//!
//! ### int32
//! ```text
//! ┌──────────────────┐
//! │   Value (4)      │
//! └──────────────────┘
//! ```
//!
//! ### string
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (4)  │        UTF-8 bytes          │
//! └──────────┴─────────────────────────────┘
//! ```
//!
//! ### Frame (stream helpers only)
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Size (4) │     Encoded message         │
//! └──────────┴─────────────────────────────┘
//! ```

mod primitive;
mod framing;

pub use primitive::{
    get_i32, get_string, put_i32, put_string, string_len, INT32_LEN, STRING_PREFIX_LEN,
};
pub use framing::{
    read_message, read_message_with, write_message, write_message_with, FRAME_HEADER_LEN,
};
