//! KhiRobotCmd service
//!
//! Sends a text command to the Kawasaki robot controller and returns the
//! driver/AS return codes with the command output.
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────────┬──────────┬──────────────┐
//! │ Len (4)  │  type bytes  │ Len (4)  │  cmd bytes   │
//! └──────────┴──────────────┴──────────┴──────────────┘
//! ```
//!
//! ### Response Format
//! ```text
//! ┌──────────────┬──────────┬──────────┬───────────────┐
//! │driver_ret (4)│as_ret (4)│ Len (4)  │ cmd_ret bytes │
//! └──────────────┴──────────┴──────────┴───────────────┘
//! ```

mod request;
mod response;

pub use request::{KhiRobotCmdRequest, KhiRobotCmdRequestInit, REQUEST_FIXED_LEN};
pub use response::{KhiRobotCmdResponse, KhiRobotCmdResponseInit, RESPONSE_FIXED_LEN};

use crate::error::Result;
use crate::message::{RosMessage, RosService};

/// The `khi_robot_msgs/KhiRobotCmd` service type
#[derive(Debug, Clone, Copy, Default)]
pub struct KhiRobotCmd;

impl RosService for KhiRobotCmd {
    const DATATYPE: &'static str = "khi_robot_msgs/KhiRobotCmd";
    const MD5SUM: &'static str = "f15db04cfafadd1969de9fd7a8329ca4";

    type Request = KhiRobotCmdRequest;
    type Response = KhiRobotCmdResponse;
}

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to bytes
pub fn encode_request(request: &KhiRobotCmdRequest) -> Result<Vec<u8>> {
    request.encode()
}

/// Decode a request at `offset`, returning it with the offset past it
pub fn decode_request(bytes: &[u8], offset: usize) -> Result<(KhiRobotCmdRequest, usize)> {
    KhiRobotCmdRequest::decode(bytes, offset)
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes
pub fn encode_response(response: &KhiRobotCmdResponse) -> Result<Vec<u8>> {
    response.encode()
}

/// Decode a response at `offset`, returning it with the offset past it
pub fn decode_response(bytes: &[u8], offset: usize) -> Result<(KhiRobotCmdResponse, usize)> {
    KhiRobotCmdResponse::decode(bytes, offset)
}
