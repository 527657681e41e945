//! Build file module: listing, target extraction and classification
//!
//! Handles Phing-style XML build files:
//! - `list` - walk `<import>` chains into an ordered build list
//! - `extract` - read every `<target>` into a flat list
//! - `classify` - assign each target its category

pub mod classify;
pub mod extract;
pub mod list;
pub mod model;

pub use classify::classify;
pub use extract::extract_targets;
pub use list::{BuildListProvider, ImportWalker, StaticBuildList};
#[cfg(test)]
pub use list::MockBuildListProvider;
pub use model::*;

use std::path::Path;

use crate::error::{DocError, DocResult};

/// Read a build file into memory, mapping any failure to a parse error
pub(crate) fn read_build_file(path: &Path) -> DocResult<String> {
    std::fs::read_to_string(path).map_err(|e| DocError::parse(path, e))
}

/// Parse build file text, allowing a DOCTYPE declaration
pub(crate) fn parse_document<'a>(
    path: &Path,
    text: &'a str,
) -> DocResult<roxmltree::Document<'a>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    roxmltree::Document::parse_with_options(text, options).map_err(|e| DocError::parse(path, e))
}
