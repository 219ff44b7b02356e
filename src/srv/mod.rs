//! Service definitions of the `khi_robot_msgs` package

pub mod khi_robot_cmd;

pub use khi_robot_cmd::{
    KhiRobotCmd, KhiRobotCmdRequest, KhiRobotCmdRequestInit, KhiRobotCmdResponse,
    KhiRobotCmdResponseInit,
};
