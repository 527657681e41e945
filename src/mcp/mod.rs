//! MCP Server module
//!
//! Provides MCP tools for build documentation:
//! - `list_build_files` - Show the build files reachable through imports
//! - `list_targets` - List classified targets
//! - `generate_docs` - Render docs/target-list.md

pub mod server;

pub use server::TargetdocServer;
