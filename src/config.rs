//! Codec configuration
//!
//! Limits applied while encoding and decoding, with sensible defaults.

/// Default upper bound for a single string field (16 MB)
pub const DEFAULT_MAX_FIELD_LEN: usize = 16 * 1024 * 1024;

/// Default upper bound for a framed message (32 MB)
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 32 * 1024 * 1024;

/// Limits for the message codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Max byte length of one string field on decode. A length prefix above
    /// this is treated as malformed.
    pub max_field_len: usize,

    /// Optional cap on string fields when encoding. `None` accepts any
    /// length that fits the u32 prefix.
    pub encode_field_limit: Option<usize>,

    /// Max size of a framed message read from a stream
    pub max_message_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            encode_field_limit: None,
            max_message_len: DEFAULT_MAX_MESSAGE_LEN,
        }
    }
}

impl CodecConfig {
    /// Create a new config builder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Set the max string field length (in bytes)
    pub fn max_field_len(mut self, len: usize) -> Self {
        self.config.max_field_len = len;
        self
    }

    /// Reject string fields longer than `len` when encoding
    pub fn encode_field_limit(mut self, len: usize) -> Self {
        self.config.encode_field_limit = Some(len);
        self
    }

    /// Set the max framed message length (in bytes)
    pub fn max_message_len(mut self, len: usize) -> Self {
        self.config.max_message_len = len;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}
