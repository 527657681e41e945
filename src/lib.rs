//! targetdoc - Target documentation for Phing build files
//!
//! Walks a root build file and everything it imports, classifies every
//! target, and renders the result into `{build_dir}/docs/target-list.md`:
//! - **Build list** - pre-order traversal of `<import>` elements
//! - **Classification** - build, callback, deprecated, helper, wrapper
//! - **Rendering** - Markdown headings with HTML tables, wrapper playbooks
//!
//! ## MCP Tools
//!
//! - `list_build_files` - Show the build list
//! - `list_targets` - List classified targets
//! - `generate_docs` - Generate the documentation

pub mod buildfile;
pub mod cli;
pub mod config;
pub mod docgen;
pub mod error;
pub mod mcp;
pub mod render;

pub use buildfile::{
    classify, extract_targets, BuildFileInfo, BuildListProvider, Category, ImportWalker,
    StaticBuildList, Target, Visibility,
};
pub use cli::{Cli, Commands};
pub use config::Config;
pub use docgen::{DocGenerator, GeneratedDocs};
pub use error::{DocError, DocResult, ErrorInfo};
pub use mcp::TargetdocServer;
