//! khi-robot-cmd CLI
//!
//! Encodes and decodes KhiRobotCmd requests and responses from the command line.

use std::io::Write;
use clap::{Parser, Subcommand, ValueEnum};
use khi_robot_msgs::config::DEFAULT_MAX_FIELD_LEN;
use khi_robot_msgs::{
    CodecConfig, KhiRobotCmd, KhiRobotCmdRequest, KhiRobotCmdRequestInit, KhiRobotCmdResponse,
    KhiRobotCmdResponseInit, MsgError, Result, RosMessage, RosService,
};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// KhiRobotCmd codec tool
#[derive(Parser, Debug)]
#[command(name = "khi-robot-cmd")]
#[command(about = "Encode and decode khi_robot_msgs/KhiRobotCmd messages")]
#[command(version)]
struct Args {
    /// Max bytes accepted for one string field when decoding
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_FIELD_LEN)]
    max_field_len: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a message and print it as hex
    Encode {
        #[command(subcommand)]
        message: EncodeMessage,
    },

    /// Decode a hex encoded message
    Decode {
        /// Which message the bytes hold
        #[arg(value_enum)]
        kind: MessageKind,

        /// Message bytes as hex
        hex: String,

        /// Byte offset where the message starts
        #[arg(short, long, default_value = "0")]
        offset: usize,

        /// Print the message as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print type names, checksums and schema text
    Info,
}

#[derive(Subcommand, Debug)]
enum EncodeMessage {
    /// Encode a request; unset fields are empty
    Request {
        /// Command category
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Command text
        #[arg(short, long)]
        cmd: Option<String>,
    },

    /// Encode a response; unset codes are 0, unset text is empty
    Response {
        /// Driver return code
        #[arg(long, allow_hyphen_values = true)]
        driver_ret: Option<i32>,

        /// AS return code
        #[arg(long, allow_hyphen_values = true)]
        as_ret: Option<i32>,

        /// Command output
        #[arg(long)]
        cmd_ret: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum MessageKind {
    Request,
    Response,
}

fn main() {
    // Logs go to stderr so stdout stays machine readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,khi_robot_msgs=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = CodecConfig::builder()
        .max_field_len(args.max_field_len)
        .build();

    let stdout = std::io::stdout();
    if let Err(e) = run(args.command, &config, &mut stdout.lock()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run<W: Write>(command: Commands, config: &CodecConfig, out: &mut W) -> Result<()> {
    match command {
        Commands::Encode { message } => {
            let bytes = match message {
                EncodeMessage::Request { kind, cmd } => {
                    KhiRobotCmdRequest::resolve(KhiRobotCmdRequestInit { r#type: kind, cmd })
                        .encode_with(config)?
                }
                EncodeMessage::Response {
                    driver_ret,
                    as_ret,
                    cmd_ret,
                } => KhiRobotCmdResponse::resolve(KhiRobotCmdResponseInit {
                    driver_ret,
                    as_ret,
                    cmd_ret,
                })
                .encode_with(config)?,
            };
            tracing::debug!(len = bytes.len(), "encoded message");
            writeln!(out, "{}", hex::encode(bytes))?;
        }
        Commands::Decode {
            kind,
            hex,
            offset,
            json,
        } => {
            let bytes = hex::decode(hex.trim())
                .map_err(|e| MsgError::Decoding(format!("invalid hex input: {}", e)))?;
            match kind {
                MessageKind::Request => {
                    let request: KhiRobotCmdRequest = decode_hex(&bytes, offset, config)?;
                    if json {
                        write_json(out, &request)?;
                    } else {
                        writeln!(out, "type: {}", request.r#type)?;
                        writeln!(out, "cmd:  {}", request.cmd)?;
                    }
                }
                MessageKind::Response => {
                    let response: KhiRobotCmdResponse = decode_hex(&bytes, offset, config)?;
                    if json {
                        write_json(out, &response)?;
                    } else {
                        writeln!(out, "driver_ret: {}", response.driver_ret)?;
                        writeln!(out, "as_ret:     {}", response.as_ret)?;
                        writeln!(out, "cmd_ret:    {}", response.cmd_ret)?;
                    }
                }
            }
        }
        Commands::Info => {
            writeln!(out, "{} [{}]", KhiRobotCmd::DATATYPE, KhiRobotCmd::MD5SUM)?;
            write_message_info::<KhiRobotCmdRequest, W>(out)?;
            write_message_info::<KhiRobotCmdResponse, W>(out)?;
        }
    }
    Ok(())
}

fn decode_hex<M: RosMessage>(bytes: &[u8], offset: usize, config: &CodecConfig) -> Result<M> {
    let (message, end) = M::decode_with(bytes, offset, config)?;
    if end != bytes.len() {
        tracing::warn!(trailing = bytes.len() - end, "input has bytes after the message");
    }
    Ok(message)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| MsgError::Encoding(format!("json output: {}", e)))?;
    writeln!(out, "{}", text)?;
    Ok(())
}

fn write_message_info<M: RosMessage, W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{} [{}]", M::DATATYPE, M::MD5SUM)?;
    for line in M::DEFINITION.lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}
