//! Build list providers
//!
//! A build list is the ordered set of build files documentation is generated
//! for, each with its project name and import depth. The root file comes
//! first, followed by its imports depth-first in declaration order.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::model::BuildFileInfo;
use super::{parse_document, read_build_file};
use crate::config::expand_properties;
use crate::error::DocResult;

/// Supplies the ordered build list to the documentation pipeline
#[cfg_attr(test, mockall::automock)]
pub trait BuildListProvider {
    /// Return build files in traversal order
    ///
    /// # Errors
    /// * `DocError::Parse` - If a listed build file cannot be read or parsed
    fn build_list(&self) -> DocResult<Vec<BuildFileInfo>>;
}

/// A fixed build list
#[derive(Debug, Clone, Default)]
pub struct StaticBuildList {
    files: Vec<BuildFileInfo>,
}

impl StaticBuildList {
    pub fn new(files: Vec<BuildFileInfo>) -> Self {
        Self { files }
    }
}

impl BuildListProvider for StaticBuildList {
    fn build_list(&self) -> DocResult<Vec<BuildFileInfo>> {
        Ok(self.files.clone())
    }
}

/// Walks `<import file="...">` chains starting from a root build file
///
/// `${name}` tokens in import paths are expanded from the configured
/// properties, the `<property name value>` elements met along the walk
/// (first definition wins, as in Phing), and two built-ins:
/// `project.basedir` (the root file's directory) and `phing.dir`
/// (the importing file's directory).
#[derive(Debug, Clone)]
pub struct ImportWalker {
    root: PathBuf,
    properties: HashMap<String, String>,
}

impl ImportWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_properties(mut self, properties: HashMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    fn walk(
        &self,
        path: &Path,
        level: usize,
        properties: &mut HashMap<String, String>,
        seen: &mut HashSet<PathBuf>,
        out: &mut Vec<BuildFileInfo>,
    ) -> DocResult<()> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !seen.insert(key) {
            tracing::debug!("Skipping already listed build file: {}", path.display());
            return Ok(());
        }

        let text = read_build_file(path)?;
        let doc = parse_document(path, &text)?;
        let project = doc.root_element();

        out.push(BuildFileInfo::new(
            path,
            project.attribute("name").unwrap_or_default(),
            level,
        ));

        let dir = parent_dir(path);
        properties.insert("phing.dir".to_string(), dir.display().to_string());

        let mut imports = Vec::new();
        for node in project.children().filter(|n| n.is_element()) {
            match node.tag_name().name() {
                "property" => {
                    if let (Some(name), Some(value)) =
                        (node.attribute("name"), node.attribute("value"))
                    {
                        if !properties.contains_key(name) {
                            let value = expand_properties(value, properties);
                            properties.insert(name.to_string(), value);
                        }
                    }
                }
                "import" => {
                    if let Some(file) = node.attribute("file") {
                        imports.push(dir.join(expand_properties(file, properties)));
                    }
                }
                _ => {}
            }
        }

        for import in imports {
            if !import.is_file() {
                tracing::warn!(
                    "Import not found, skipping: {} (from {})",
                    import.display(),
                    path.display()
                );
                continue;
            }
            self.walk(&import, level + 1, properties, seen, out)?;
            // Restore the importer's directory for its remaining imports
            properties.insert("phing.dir".to_string(), dir.display().to_string());
        }

        Ok(())
    }
}

impl BuildListProvider for ImportWalker {
    fn build_list(&self) -> DocResult<Vec<BuildFileInfo>> {
        let mut properties = self.properties.clone();
        properties
            .entry("project.basedir".to_string())
            .or_insert_with(|| parent_dir(&self.root).display().to_string());

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.walk(&self.root, 0, &mut properties, &mut seen, &mut out)?;

        tracing::debug!("Build list has {} file(s)", out.len());
        Ok(out)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocError;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_static_build_list() {
        let files = vec![
            BuildFileInfo::new("build.xml", "site", 0),
            BuildFileInfo::new("phing/test.xml", "tests", 1),
        ];
        let provider = StaticBuildList::new(files.clone());
        assert_eq!(provider.build_list().unwrap(), files);
    }

    #[test]
    fn test_walk_root_only() {
        let dir = TempDir::new().unwrap();
        let root = write(dir.path(), "build.xml", r#"<project name="site"/>"#);

        let list = ImportWalker::new(&root).build_list().unwrap();

        assert_eq!(list, vec![BuildFileInfo::new(&root, "site", 0)]);
    }

    #[test]
    fn test_walk_nested_imports_in_order() {
        let dir = TempDir::new().unwrap();
        let root = write(
            dir.path(),
            "build.xml",
            r#"<project name="site">
                <import file="phing/drupal.xml"/>
                <import file="phing/tests.xml"/>
            </project>"#,
        );
        write(
            dir.path(),
            "phing/drupal.xml",
            r#"<project name="drupal"><import file="help.xml"/></project>"#,
        );
        write(dir.path(), "phing/help.xml", r#"<project name="help"/>"#);
        write(dir.path(), "phing/tests.xml", r#"<project/>"#);

        let list = ImportWalker::new(&root).build_list().unwrap();

        let summary: Vec<(&str, usize)> =
            list.iter().map(|b| (b.name.as_str(), b.level)).collect();
        assert_eq!(
            summary,
            vec![("site", 0), ("drupal", 1), ("help", 2), ("", 1)]
        );
        assert!(list[2].path.ends_with("phing/help.xml"));
    }

    #[test]
    fn test_walk_expands_properties() {
        let dir = TempDir::new().unwrap();
        let root = write(
            dir.path(),
            "build.xml",
            r#"<project name="site">
                <property name="includes.dir" value="${project.basedir}/includes"/>
                <import file="${includes.dir}/${tool.name}.xml"/>
            </project>"#,
        );
        write(dir.path(), "includes/toolkit.xml", r#"<project name="toolkit"/>"#);

        let mut props = HashMap::new();
        props.insert("tool.name".to_string(), "toolkit".to_string());
        let list = ImportWalker::new(&root)
            .with_properties(props)
            .build_list()
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "toolkit");
    }

    #[test]
    fn test_walk_skips_missing_imports() {
        let dir = TempDir::new().unwrap();
        let root = write(
            dir.path(),
            "build.xml",
            r#"<project name="site"><import file="missing.xml"/></project>"#,
        );

        let list = ImportWalker::new(&root).build_list().unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_walk_lists_each_file_once() {
        let dir = TempDir::new().unwrap();
        let root = write(
            dir.path(),
            "build.xml",
            r#"<project name="site">
                <import file="a.xml"/>
                <import file="b.xml"/>
            </project>"#,
        );
        write(dir.path(), "a.xml", r#"<project name="a"><import file="b.xml"/></project>"#);
        write(dir.path(), "b.xml", r#"<project name="b"><import file="build.xml"/></project>"#);

        let list = ImportWalker::new(&root).build_list().unwrap();

        let names: Vec<&str> = list.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["site", "a", "b"]);
        assert_eq!(list[2].level, 2);
    }

    #[test]
    fn test_walk_missing_root_is_parse_error() {
        let result = ImportWalker::new("/nonexistent/build.xml").build_list();
        assert!(matches!(result, Err(DocError::Parse { .. })));
    }

    #[test]
    fn test_walk_malformed_import_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let root = write(
            dir.path(),
            "build.xml",
            r#"<project name="site"><import file="broken.xml"/></project>"#,
        );
        write(dir.path(), "broken.xml", "<project name=\"broken\">");

        let result = ImportWalker::new(&root).build_list();
        assert!(matches!(result, Err(DocError::Parse { .. })));
    }
}
