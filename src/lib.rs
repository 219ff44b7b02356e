//! # khi_robot_msgs
//!
//! Wire codec for the `khi_robot_msgs/KhiRobotCmd` service:
//! - Fixed-layout binary encoding (length-prefixed strings, little-endian int32)
//! - Schema metadata (type name, checksum, definition) for compatibility checks
//! - Partial-value constructors with deterministic defaults
//! - Size-prefixed stream framing
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Transport (caller supplied)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  KhiRobotCmd (srv)                          │
//! │           Request codec  /  Response codec                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   string    │          │    int32    │
//!   │  (wire)     │          │   (wire)    │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod wire;
pub mod message;
pub mod srv;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MsgError, Result};
pub use config::CodecConfig;
pub use message::{RosMessage, RosService};
pub use srv::{
    KhiRobotCmd, KhiRobotCmdRequest, KhiRobotCmdRequestInit, KhiRobotCmdResponse,
    KhiRobotCmdResponseInit,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of khi_robot_msgs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
