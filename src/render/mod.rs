//! Rendering of classified targets into Markdown with HTML tables
//!
//! Rendering happens in two steps: classified targets are first arranged
//! into plain section/row structures, which a renderer then turns into
//! markup. Only the renderers know about HTML.

pub mod tree;
pub mod wrapper;

pub use tree::{build_sections, Row, Section, TreeRenderer};
pub use wrapper::{build_wrapper_blocks, PlaybookRow, WrapperBlock, WrapperRenderer};

/// Append one line of markup at the given indentation (in spaces)
pub(crate) fn push_line(out: &mut String, indent: usize, text: &str) {
    out.extend(std::iter::repeat(' ').take(indent));
    out.push_str(text);
    out.push('\n');
}
