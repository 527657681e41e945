//! Configuration model for targetdoc
//!
//! Defines the structure for XDG-compliant layered configuration.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::buildfile::{Category, Visibility};

/// Location of the generated document, relative to the build directory
pub const OUTPUT_RELATIVE_PATH: &str = "docs/target-list.md";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Documentation generation settings
    #[serde(default)]
    pub docs: DocsConfig,

    /// Icon URLs used in rendered tables
    #[serde(default)]
    pub icons: IconsConfig,

    /// Properties available to `${...}` expansion in import paths
    #[serde(default)]
    pub properties: HashMap<String, String>,

    /// Wrapper targets, keyed by wrapper name
    #[serde(default)]
    pub wrappers: BTreeMap<String, WrapperConfig>,
}

/// Documentation generation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Root build file to start the import walk from
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// Build directory; the document lands in `{build_dir}/docs/target-list.md`
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Project names never given a section
    #[serde(default = "default_skip_projects")]
    pub skip_projects: Vec<String>,
}

fn default_build_file() -> String {
    "build.xml".to_string()
}

fn default_build_dir() -> String {
    "build".to_string()
}

fn default_skip_projects() -> Vec<String> {
    vec!["deprecated".to_string()]
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            build_file: default_build_file(),
            build_dir: default_build_dir(),
            skip_projects: default_skip_projects(),
        }
    }
}

impl DocsConfig {
    /// Full path of the generated document
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.build_dir).join(OUTPUT_RELATIVE_PATH)
    }
}

const ICON_BASE: &str = "https://cdn0.iconfinder.com/data/icons/octicons/1024";

/// Icon lookup table for the glyph column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IconsConfig {
    #[serde(default = "default_visible_icon")]
    pub visible: String,
    #[serde(default = "default_hidden_icon")]
    pub hidden: String,
    #[serde(default = "default_wrapper_icon")]
    pub wrapper: String,
    #[serde(default = "default_build_icon")]
    pub build: String,
    #[serde(default = "default_deprecated_icon")]
    pub deprecated: String,
    #[serde(default = "default_helper_icon")]
    pub helper: String,
    #[serde(default = "default_callback_icon")]
    pub callback: String,
    /// Shown next to a wrapper's description
    #[serde(default = "default_checklist_icon")]
    pub checklist: String,
}

fn icon(file: &str) -> String {
    format!("{}/{}", ICON_BASE, file)
}

fn default_visible_icon() -> String {
    icon("eye-16.png")
}

fn default_hidden_icon() -> String {
    icon("gist-secret-20.png")
}

fn default_wrapper_icon() -> String {
    icon("star-20.png")
}

fn default_build_icon() -> String {
    icon("three-bars-20.png")
}

fn default_deprecated_icon() -> String {
    icon("trashcan-20.png")
}

fn default_helper_icon() -> String {
    icon("tools-16.png")
}

fn default_callback_icon() -> String {
    icon("zap-20.png")
}

fn default_checklist_icon() -> String {
    icon("checklist-20.png")
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            visible: default_visible_icon(),
            hidden: default_hidden_icon(),
            wrapper: default_wrapper_icon(),
            build: default_build_icon(),
            deprecated: default_deprecated_icon(),
            helper: default_helper_icon(),
            callback: default_callback_icon(),
            checklist: default_checklist_icon(),
        }
    }
}

impl IconsConfig {
    pub fn for_visibility(&self, visibility: Visibility) -> &str {
        match visibility {
            Visibility::Visible => &self.visible,
            Visibility::Hidden => &self.hidden,
        }
    }

    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Wrapper => &self.wrapper,
            Category::Build => &self.build,
            Category::Deprecated => &self.deprecated,
            Category::Helper => &self.helper,
            Category::Callback => &self.callback,
        }
    }
}

/// A wrapper target: a build target presented with descriptive metadata
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct WrapperConfig {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub properties: Vec<WrapperProperty>,
}

/// One property row of a wrapper's properties table
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct WrapperProperty {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.docs.build_file, "build.xml");
        assert_eq!(config.docs.build_dir, "build");
        assert_eq!(config.docs.skip_projects, vec!["deprecated"]);
        assert!(config.wrappers.is_empty());
        assert!(config.properties.is_empty());
    }

    #[test]
    fn test_output_path() {
        let docs = DocsConfig {
            build_dir: "/srv/site/build".to_string(),
            ..Default::default()
        };
        assert_eq!(
            docs.output_path(),
            PathBuf::from("/srv/site/build/docs/target-list.md")
        );
    }

    #[test]
    fn test_default_icons() {
        let icons = IconsConfig::default();

        assert!(icons.visible.ends_with("/eye-16.png"));
        assert!(icons.hidden.ends_with("/gist-secret-20.png"));
        assert_eq!(icons.for_category(Category::Callback), icons.callback);
        assert_eq!(icons.for_visibility(Visibility::Hidden), icons.hidden);
    }

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
            [docs]
            build_dir = "out"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.docs.build_dir, "out");
        // Defaults should still apply
        assert_eq!(config.docs.build_file, "build.xml");
        assert_eq!(config.docs.skip_projects, vec!["deprecated"]);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
            [docs]
            build_file = "phing/build.xml"
            build_dir = "/tmp/build"
            skip_projects = []

            [icons]
            helper = "https://example.com/helper.png"

            [properties]
            "toolkit.dir" = "vendor/toolkit"

            [wrappers.release]
            description = "Create a release package"

            [[wrappers.release.properties]]
            name = "release.path"
            value = "build/release"
            description = "Where to put the package"
        "#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.docs.build_file, "phing/build.xml");
        assert!(config.docs.skip_projects.is_empty());
        assert_eq!(config.icons.helper, "https://example.com/helper.png");
        assert!(config.icons.build.ends_with("three-bars-20.png"));
        assert_eq!(
            config.properties.get("toolkit.dir"),
            Some(&"vendor/toolkit".to_string())
        );

        assert!(config.wrappers.contains_key("release"));
        let wrapper = config.wrappers.get("release").unwrap();
        assert_eq!(wrapper.description, "Create a release package");
        assert_eq!(wrapper.properties.len(), 1);
        assert_eq!(wrapper.properties[0].value, "build/release");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();

        // Should be able to deserialize what we serialized
        let _: Config = toml::from_str(&toml_str).unwrap();
    }
}
