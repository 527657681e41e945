//! Target extraction
//!
//! Reads every `<target>` element of every listed build file, in build-list
//! order and document order within a file. Alongside the targets it
//! collects the set of names referenced by any `build-*` target's
//! `depends` attribute, which the classifier needs to spot callbacks.

use std::path::Path;

use super::model::{BuildFileInfo, Extraction, Target, Visibility};
use super::{parse_document, read_build_file};
use crate::error::{DocError, DocResult};

/// Extract all targets from the given build files
///
/// # Errors
/// * `DocError::Parse` - A build file is unreadable or not well-formed
/// * `DocError::MissingAttribute` - A target has no `name`, a `build-*`
///   target has no `depends`, or a `<replacedby>` has no `target`
pub fn extract_targets(build_list: &[BuildFileInfo]) -> DocResult<Extraction> {
    let mut extraction = Extraction::default();

    for info in build_list {
        let text = read_build_file(&info.path)?;
        let found = extract_from_str(&info.path, &text)?;
        tracing::debug!(
            "Extracted {} target(s) from {}",
            found.len(),
            info.path.display()
        );

        for target in found {
            extraction
                .referenced
                .extend(target.dependencies.iter().cloned());
            extraction.targets.push(target);
        }
    }

    Ok(extraction)
}

/// Extract the targets of a single build file's contents
pub fn extract_from_str(path: &Path, text: &str) -> DocResult<Vec<Target>> {
    let doc = parse_document(path, text)?;
    let mut targets = Vec::new();

    for node in doc.descendants().filter(|n| n.has_tag_name("target")) {
        let name = node
            .attribute("name")
            .ok_or_else(|| DocError::missing_attribute(path, "<unnamed>", "name"))?;

        let mut target = Target::new(name, path)
            .with_description(node.attribute("description").unwrap_or_default())
            .with_visibility(Visibility::from_hidden_attr(node.attribute("hidden")));

        target.declared_depends = node.attribute("depends").map(split_depends);
        if target.is_build_named() {
            target.dependencies = target
                .declared_depends
                .clone()
                .ok_or_else(|| DocError::missing_attribute(path, name, "depends"))?;
        }

        let replacements: Vec<_> = node
            .children()
            .filter(|n| n.has_tag_name("replacedby"))
            .collect();
        match replacements.as_slice() {
            [] => {}
            [replacement] => {
                let replaced_by = replacement
                    .attribute("target")
                    .ok_or_else(|| DocError::missing_attribute(path, name, "replacedby/@target"))?;
                target.replacement_hint = Some(replaced_by.to_string());
            }
            many => {
                tracing::warn!(
                    "Target '{}' in {} declares {} replacedby elements; not marking it deprecated",
                    name,
                    path.display(),
                    many.len()
                );
            }
        }

        targets.push(target);
    }

    Ok(targets)
}

/// Split a `depends` attribute into trimmed, non-empty target names
fn split_depends(depends: &str) -> Vec<String> {
    depends
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
