//! CLI module for targetdoc
//!
//! Provides command-line interface with the following subcommands:
//! - `generate` - Write the target documentation
//! - `list` - List classified targets
//! - `builds` - Show the build list
//! - `mcp` - Start MCP server over stdio

pub mod commands;
pub mod mcp;

pub use commands::{Cli, Commands};
pub use mcp::run_mcp_server;
