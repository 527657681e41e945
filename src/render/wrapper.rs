//! Wrapper tables
//!
//! A wrapper is documented with its description, a properties table and a
//! playbook: the dependencies of its `<wrapper>-build` target, each resolved
//! to the build file and description of the target it names.

use std::collections::{BTreeMap, HashMap};
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::push_line;
use crate::buildfile::Target;
use crate::config::{IconsConfig, WrapperConfig, WrapperProperty};
use crate::error::{DocError, DocResult};

/// Suffix of the target holding a wrapper's playbook
pub const WRAPPER_BUILD_SUFFIX: &str = "-build";

/// Directory whose contents are listed relative to it in playbooks
const BUILD_DIR_NAME: &str = "build";

/// A resolved wrapper, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapperBlock {
    pub name: String,
    pub description: String,
    pub properties: Vec<WrapperProperty>,
    pub playbook: Vec<PlaybookRow>,
}

/// One callback of a wrapper's playbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybookRow {
    pub callback: String,
    pub build_file: String,
    pub description: String,
}

/// Resolve every wrapper against the classified targets
///
/// When a name is declared in several build files the first one in
/// build-list order is used.
///
/// # Errors
/// * `DocError::MissingReference` - The `<wrapper>-build` target or one of
///   its dependencies was not extracted
/// * `DocError::MissingAttribute` - The `<wrapper>-build` target has no
///   `depends` attribute
pub fn build_wrapper_blocks(
    wrappers: &BTreeMap<String, WrapperConfig>,
    targets: &[Target],
) -> DocResult<Vec<WrapperBlock>> {
    let mut by_name: HashMap<&str, &Target> = HashMap::new();
    for target in targets {
        by_name.entry(target.name.as_str()).or_insert(target);
    }

    let lookup = |wrapper: &str, reference: &str| {
        by_name
            .get(reference)
            .copied()
            .ok_or_else(|| DocError::MissingReference {
                wrapper: wrapper.to_string(),
                reference: reference.to_string(),
            })
    };

    wrappers
        .iter()
        .map(|(name, wrapper)| {
            let build_name = format!("{}{}", name, WRAPPER_BUILD_SUFFIX);
            let build = lookup(name.as_str(), build_name.as_str())?;

            let callbacks = build.declared_depends.as_ref().ok_or_else(|| {
                DocError::missing_attribute(&build.source_file, build_name.as_str(), "depends")
            })?;

            let playbook = callbacks
                .iter()
                .map(|callback| {
                    let target = lookup(name.as_str(), callback.as_str())?;
                    Ok(PlaybookRow {
                        callback: callback.clone(),
                        build_file: display_build_file(&target.source_file),
                        description: target.description.clone(),
                    })
                })
                .collect::<DocResult<Vec<_>>>()?;

            Ok(WrapperBlock {
                name: name.clone(),
                description: wrapper.description.clone(),
                properties: wrapper.properties.clone(),
                playbook,
            })
        })
        .collect()
}

/// Show build files below a `build` directory relative to it
///
/// Everything up to and including the first `build` directory component is
/// replaced by `./`; other paths are shown as they are.
fn display_build_file(path: &Path) -> String {
    let components: Vec<Component> = path.components().collect();
    let build_dir = components
        .iter()
        .take(components.len().saturating_sub(1))
        .position(|c| c.as_os_str() == BUILD_DIR_NAME);

    match build_dir {
        Some(index) => {
            let rest: PathBuf = components[index + 1..].iter().collect();
            format!("./{}", rest.display())
        }
        None => path.display().to_string(),
    }
}

/// Renders wrapper blocks as collapsible HTML tables
pub struct WrapperRenderer<'a> {
    icons: &'a IconsConfig,
}

impl<'a> WrapperRenderer<'a> {
    pub fn new(icons: &'a IconsConfig) -> Self {
        Self { icons }
    }

    pub fn render(&self, blocks: &[WrapperBlock]) -> String {
        let mut out = String::new();
        for block in blocks {
            self.render_block(&mut out, block);
        }
        out
    }

    fn render_block(&self, out: &mut String, block: &WrapperBlock) {
        push_line(out, 0, &format!("### {}", block.name));
        push_line(out, 0, "<table>");
        push_line(out, 4, "<thead>");
        push_line(out, 8, r#"<tr align="left">"#);
        push_line(out, 12, "<th>Description</th>");
        push_line(
            out,
            12,
            &format!(
                r#"<th width="100%">{}<img src="{}" align="right" /></th>"#,
                block.description, self.icons.checklist
            ),
        );
        push_line(out, 8, "</tr>");
        push_line(out, 4, "</thead>");
        push_line(out, 4, "<tbody>");

        open_details(out, "Properties", ["Property", "Value", "Description"], true);
        for property in &block.properties {
            detail_row(
                out,
                [
                    property.name.as_str(),
                    property.value.as_str(),
                    property.description.as_str(),
                ],
            );
        }
        close_details(out);

        open_details(out, "Playbook", ["Callback target", "Buildfile", "Description"], false);
        for row in &block.playbook {
            detail_row(
                out,
                [
                    row.callback.as_str(),
                    row.build_file.as_str(),
                    row.description.as_str(),
                ],
            );
        }
        close_details(out);

        push_line(out, 4, "</tbody>");
        push_line(out, 0, "</table>");
        out.push('\n');
    }
}

fn open_details(out: &mut String, summary: &str, headers: [&str; 3], nowrap: bool) {
    let th = if nowrap { "<th nowrap>" } else { "<th>" };
    push_line(out, 8, "<tr>");
    push_line(out, 12, r#"<td colspan="2">"#);
    push_line(out, 16, &format!("<details><summary>{}</summary>", summary));
    push_line(out, 16, r#"<table width="100%">"#);
    push_line(out, 20, "<thead>");
    push_line(out, 24, r#"<tr align="left">"#);
    push_line(out, 28, &format!("{}{}</th>", th, headers[0]));
    push_line(out, 28, &format!("{}{}</th>", th, headers[1]));
    push_line(out, 28, &format!(r#"<th width="100%">{}</th>"#, headers[2]));
    push_line(out, 24, "</tr>");
    push_line(out, 20, "</thead>");
    push_line(out, 20, "<tbody>");
}

fn detail_row(out: &mut String, cells: [&str; 3]) {
    push_line(out, 24, "<tr>");
    push_line(out, 28, &format!("<td nowrap>{}</td>", cells[0]));
    push_line(out, 28, &format!("<td nowrap>{}</td>", cells[1]));
    push_line(out, 28, &format!("<td>{}</td>", cells[2]));
    push_line(out, 24, "</tr>");
}

fn close_details(out: &mut String) {
    push_line(out, 20, "</tbody>");
    push_line(out, 16, "</table>");
    push_line(out, 16, "</details>");
    push_line(out, 12, "</td>");
    push_line(out, 8, "</tr>");
}
