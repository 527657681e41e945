//! Core types for build files and their targets

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Reserved name prefix of targets that aggregate other targets
pub const BUILD_PREFIX: &str = "build-";

/// Whether a target is listed by the build tool's help output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Parse the `hidden` attribute: only the literal "true" hides a target
    pub fn from_hidden_attr(value: Option<&str>) -> Self {
        match value {
            Some("true") => Visibility::Hidden,
            _ => Visibility::Visible,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Role of a target within the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// `build-*` target chaining more than one other target
    Build,
    /// Target only invoked as a dependency of a build target
    Callback,
    /// Target superseded by another one
    Deprecated,
    /// Standalone utility target
    Helper,
    /// Build target presented with extra metadata
    Wrapper,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Build => "build",
            Category::Callback => "callback",
            Category::Deprecated => "deprecated",
            Category::Helper => "helper",
            Category::Wrapper => "wrapper",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One `<target>` entry of a build file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    /// Target name, unique within its build file
    pub name: String,
    /// Description; holds the replacement target once deprecated
    pub description: String,
    pub visibility: Visibility,
    /// Build file that declared the target
    pub source_file: PathBuf,
    /// Targets this one chains, only read for `build-*` names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// Raw `depends` attribute of any target, split like `dependencies`.
    /// Wrapper playbooks read it since wrapper build targets need no prefix.
    #[serde(skip)]
    pub declared_depends: Option<Vec<String>>,
    /// Replacement target declared by a single `<replacedby>` child
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement_hint: Option<String>,
    /// Assigned by the classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Target {
    /// Create an unclassified visible target with no description
    pub fn new(name: impl Into<String>, source_file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            visibility: Visibility::Visible,
            source_file: source_file.into(),
            dependencies: vec![],
            declared_depends: None,
            replacement_hint: None,
            category: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self.declared_depends = Some(self.dependencies.clone());
        self
    }

    /// Record a `depends` attribute without treating the target as a chain
    pub fn with_declared_depends<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_depends = Some(deps.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement_hint = Some(replacement.into());
        self
    }

    /// Whether the name carries the reserved `build-` prefix
    pub fn is_build_named(&self) -> bool {
        self.name.starts_with(BUILD_PREFIX)
    }

    pub fn declared_in(&self, path: &Path) -> bool {
        self.source_file == path
    }
}

/// A build file as listed by a build-list provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildFileInfo {
    pub path: PathBuf,
    /// Project display name, empty when the file declares none
    pub name: String,
    /// Zero-based import depth
    pub level: usize,
}

impl BuildFileInfo {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, level: usize) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            level,
        }
    }
}

/// Output of the extractor: every target plus the names referenced as dependencies
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub targets: Vec<Target>,
    pub referenced: HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_from_hidden_attr() {
        assert_eq!(Visibility::from_hidden_attr(Some("true")), Visibility::Hidden);
        assert_eq!(Visibility::from_hidden_attr(Some("false")), Visibility::Visible);
        assert_eq!(Visibility::from_hidden_attr(Some("TRUE")), Visibility::Visible);
        assert_eq!(Visibility::from_hidden_attr(None), Visibility::Visible);
    }

    #[test]
    fn test_target_builder() {
        let target = Target::new("build-dev", "build.xml")
            .with_description("Build a development environment")
            .with_dependencies(["composer-install", "drush-site-install"]);

        assert!(target.is_build_named());
        assert_eq!(target.dependencies.len(), 2);
        assert_eq!(target.declared_depends.as_ref(), Some(&target.dependencies));
        assert!(target.category.is_none());
        assert!(target.declared_in(Path::new("build.xml")));
    }

    #[test]
    fn test_target_serialization() {
        let mut target = Target::new("old-deploy", "build.xml").with_replacement("deploy");
        target.category = Some(Category::Deprecated);

        let json = serde_json::to_string(&target).unwrap();
        assert!(json.contains("\"category\":\"deprecated\""));
        assert!(json.contains("\"visibility\":\"visible\""));
        assert!(json.contains("\"replacement_hint\":\"deploy\""));
        // dependencies should be skipped since empty
        assert!(!json.contains("\"dependencies\""));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Callback.to_string(), "callback");
        assert_eq!(Visibility::Hidden.to_string(), "hidden");
    }
}
