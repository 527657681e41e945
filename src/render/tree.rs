//! Documentation tree: one section per build file, one row per target

use std::path::Path;

use serde::Serialize;

use super::push_line;
use crate::buildfile::{BuildFileInfo, Category, Target, Visibility};
use crate::config::IconsConfig;

/// A rendered build file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Markdown heading level, import depth + 1
    pub heading_level: usize,
    pub title: String,
    pub rows: Vec<Row>,
}

/// A rendered target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub visibility: Visibility,
    pub category: Category,
    pub name: String,
    pub description: String,
}

impl From<&Target> for Row {
    fn from(target: &Target) -> Self {
        Row {
            visibility: target.visibility,
            // Classification is total; unclassified input renders as a helper
            category: target.category.unwrap_or(Category::Helper),
            name: target.name.clone(),
            description: target.description.clone(),
        }
    }
}

/// Group classified targets into sections, in build-list order
///
/// A build file gets no section when it is not a readable file, has an
/// empty project name or one listed in `skip_projects`, or declares fewer
/// than two targets.
pub fn build_sections(
    build_list: &[BuildFileInfo],
    targets: &[Target],
    skip_projects: &[String],
) -> Vec<Section> {
    build_list
        .iter()
        .filter(|info| is_documented_project(info, skip_projects))
        .filter_map(|info| {
            let rows: Vec<Row> = targets
                .iter()
                .filter(|t| t.declared_in(&info.path))
                .map(Row::from)
                .collect();

            if rows.len() <= 1 {
                tracing::debug!(
                    "Skipping {}: {} target(s)",
                    info.path.display(),
                    rows.len()
                );
                return None;
            }

            Some(Section {
                heading_level: info.level + 1,
                title: info.name.clone(),
                rows,
            })
        })
        .collect()
}

fn is_documented_project(info: &BuildFileInfo, skip_projects: &[String]) -> bool {
    is_readable_file(&info.path)
        && !info.name.is_empty()
        && !skip_projects.iter().any(|p| p == &info.name)
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && std::fs::File::open(path).is_ok()
}

/// Renders sections as Markdown headings followed by HTML tables
pub struct TreeRenderer<'a> {
    icons: &'a IconsConfig,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(icons: &'a IconsConfig) -> Self {
        Self { icons }
    }

    pub fn render(&self, sections: &[Section]) -> String {
        let mut out = String::new();
        for section in sections {
            self.render_section(&mut out, section);
        }
        out
    }

    fn render_section(&self, out: &mut String, section: &Section) {
        out.push_str(&"#".repeat(section.heading_level));
        out.push(' ');
        out.push_str(&section.title);
        out.push('\n');

        push_line(out, 0, "<table>");
        push_line(out, 4, "<thead>");
        push_line(out, 8, r#"<tr align="left">"#);
        push_line(out, 12, "<th nowrap>Target type</th>");
        push_line(out, 12, "<th nowrap>Name</th>");
        push_line(out, 12, "<th nowrap>Description</th>");
        push_line(out, 8, "</tr>");
        push_line(out, 4, "</thead>");
        push_line(out, 4, "<tbody>");

        for row in &section.rows {
            self.render_row(out, row);
        }

        push_line(out, 4, "</tbody>");
        push_line(out, 0, "</table>");
        out.push('\n');
    }

    fn render_row(&self, out: &mut String, row: &Row) {
        push_line(out, 8, "<tr>");
        push_line(out, 12, "<td nowrap>");
        push_line(
            out,
            16,
            &icon_tag(self.icons.for_visibility(row.visibility), row.visibility.name()),
        );
        push_line(
            out,
            16,
            &icon_tag(self.icons.for_category(row.category), row.category.name()),
        );
        push_line(out, 12, "</td>");
        push_line(out, 12, &format!("<td nowrap>{}</td>", row.name));
        push_line(out, 12, &format!(r#"<td width="80%">{}</td>"#, row.description));
        push_line(out, 8, "</tr>");
    }
}

fn icon_tag(src: &str, alt: &str) -> String {
    format!(r#"<img src="{}" align="left" alt="{}" />"#, src, alt)
}
