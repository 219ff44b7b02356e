//! KhiRobotCmd request
//!
//! A command addressed to the robot controller, e.g. `driver` / `restart`.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use crate::config::CodecConfig;
use crate::error::Result;
use crate::message::RosMessage;
use crate::wire::{self, STRING_PREFIX_LEN};

/// Bytes taken by the request besides its string contents (two prefixes)
pub const REQUEST_FIXED_LEN: usize = STRING_PREFIX_LEN + STRING_PREFIX_LEN;

/// Command request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KhiRobotCmdRequest {
    /// Command category (`driver`, `as`, ...)
    pub r#type: String,

    /// Command text
    pub cmd: String,
}

/// Partially specified request; unset fields resolve to `""`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KhiRobotCmdRequestInit {
    pub r#type: Option<String>,
    pub cmd: Option<String>,
}

impl KhiRobotCmdRequest {
    pub fn new(r#type: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            r#type: r#type.into(),
            cmd: cmd.into(),
        }
    }

    /// Build a request from a partial value, applying defaults
    pub fn resolve(init: KhiRobotCmdRequestInit) -> Self {
        Self {
            r#type: init.r#type.unwrap_or_default(),
            cmd: init.cmd.unwrap_or_default(),
        }
    }
}

impl From<KhiRobotCmdRequestInit> for KhiRobotCmdRequest {
    fn from(init: KhiRobotCmdRequestInit) -> Self {
        Self::resolve(init)
    }
}

impl RosMessage for KhiRobotCmdRequest {
    const DATATYPE: &'static str = "khi_robot_msgs/KhiRobotCmdRequest";
    const MD5SUM: &'static str = "5d68f1ab31d25490e0af3d08f063b65d";
    const DEFINITION: &'static str = "string type\nstring cmd\n";

    fn encoded_len(&self) -> usize {
        wire::string_len(&self.r#type) + wire::string_len(&self.cmd)
    }

    fn encode_into<B: BufMut>(&self, buf: &mut B, config: &CodecConfig) -> Result<()> {
        wire::put_string(buf, "type", &self.r#type, config)?;
        wire::put_string(buf, "cmd", &self.cmd, config)?;
        Ok(())
    }

    fn decode_from<B: Buf>(buf: &mut B, config: &CodecConfig) -> Result<Self> {
        let r#type = wire::get_string(buf, "type", config)?;
        let cmd = wire::get_string(buf, "cmd", config)?;
        Ok(Self { r#type, cmd })
    }
}
