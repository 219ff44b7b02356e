//! KhiRobotCmd response
//!
//! Driver and AS-language return codes plus the controller's text reply.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use crate::config::CodecConfig;
use crate::error::Result;
use crate::message::RosMessage;
use crate::wire::{self, INT32_LEN, STRING_PREFIX_LEN};

/// Bytes taken by the response besides `cmd_ret` contents
pub const RESPONSE_FIXED_LEN: usize = INT32_LEN + INT32_LEN + STRING_PREFIX_LEN;

/// Command response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KhiRobotCmdResponse {
    /// Return code from the robot driver
    pub driver_ret: i32,

    /// Return code from the AS controller
    pub as_ret: i32,

    /// Text output of the command
    pub cmd_ret: String,
}

/// Partially specified response; unset ints resolve to 0, text to `""`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KhiRobotCmdResponseInit {
    pub driver_ret: Option<i32>,
    pub as_ret: Option<i32>,
    pub cmd_ret: Option<String>,
}

impl KhiRobotCmdResponse {
    pub fn new(driver_ret: i32, as_ret: i32, cmd_ret: impl Into<String>) -> Self {
        Self {
            driver_ret,
            as_ret,
            cmd_ret: cmd_ret.into(),
        }
    }

    /// Build a response from a partial value, applying defaults
    pub fn resolve(init: KhiRobotCmdResponseInit) -> Self {
        Self {
            driver_ret: init.driver_ret.unwrap_or_default(),
            as_ret: init.as_ret.unwrap_or_default(),
            cmd_ret: init.cmd_ret.unwrap_or_default(),
        }
    }
}

impl From<KhiRobotCmdResponseInit> for KhiRobotCmdResponse {
    fn from(init: KhiRobotCmdResponseInit) -> Self {
        Self::resolve(init)
    }
}

impl RosMessage for KhiRobotCmdResponse {
    const DATATYPE: &'static str = "khi_robot_msgs/KhiRobotCmdResponse";
    const MD5SUM: &'static str = "baff9913c1b46a5cd1d4da599ea7743d";
    const DEFINITION: &'static str = "int32 driver_ret\nint32 as_ret\nstring cmd_ret\n";

    fn encoded_len(&self) -> usize {
        INT32_LEN + INT32_LEN + wire::string_len(&self.cmd_ret)
    }

    fn encode_into<B: BufMut>(&self, buf: &mut B, config: &CodecConfig) -> Result<()> {
        wire::put_i32(buf, self.driver_ret);
        wire::put_i32(buf, self.as_ret);
        wire::put_string(buf, "cmd_ret", &self.cmd_ret, config)
    }

    fn decode_from<B: Buf>(buf: &mut B, config: &CodecConfig) -> Result<Self> {
        let driver_ret = wire::get_i32(buf, "driver_ret")?;
        let as_ret = wire::get_i32(buf, "as_ret")?;
        let cmd_ret = wire::get_string(buf, "cmd_ret", config)?;
        Ok(Self {
            driver_ret,
            as_ret,
            cmd_ret,
        })
    }
}
