//! Configuration loader with XDG-compliant path resolution
//!
//! Loads configuration from multiple locations with layered priority:
//! 1. `/etc/targetdoc/config.toml` (lowest priority)
//! 2. `~/.config/targetdoc/config.toml`
//! 3. `~/.targetdoc.toml`
//! 4. `./.targetdoc.toml` (highest priority)

use std::path::PathBuf;

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::model::Config;

/// Application name used for XDG directories
const APP_NAME: &str = "targetdoc";

/// Get XDG config search paths in priority order (lowest to highest)
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("/etc/{}/config.toml", APP_NAME)));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{}.toml", APP_NAME)));
    }

    // Project root wins over everything file-based
    paths.push(PathBuf::from(format!(".{}.toml", APP_NAME)));

    paths
}

/// Load configuration with XDG layering
///
/// Configurations are merged in priority order, with later files
/// overriding earlier ones. Environment variables with prefix
/// `TARGETDOC_` override all file-based configuration.
///
/// # Arguments
/// * `override_path` - Optional path to a config file that takes highest priority
///
/// # Returns
/// * `Result<Config>` - The merged configuration
pub fn load_config(override_path: Option<&str>) -> Result<Config> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    for path in config_paths() {
        if path.exists() {
            tracing::debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }
    }

    if let Some(path) = override_path {
        let path = PathBuf::from(path);
        if path.exists() {
            tracing::debug!("Loading override config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        } else {
            tracing::warn!("Override config not found: {}", path.display());
        }
    }

    // Format: TARGETDOC_DOCS__BUILD_DIR=/tmp/build
    // Maps to: docs.build_dir = "/tmp/build"
    figment = figment.merge(Env::prefixed("TARGETDOC_").split("__"));

    figment.extract().context("Failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_paths_returns_expected_paths() {
        let paths = config_paths();

        assert!(paths.len() >= 2);
        assert!(paths[0].to_string_lossy().contains("/etc/"));
        assert!(paths
            .last()
            .unwrap()
            .to_string_lossy()
            .contains(".targetdoc.toml"));
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None).unwrap();

        assert_eq!(config.docs.build_file, "build.xml");
        assert_eq!(config.docs.skip_projects, vec!["deprecated"]);
    }

    #[test]
    fn test_load_config_from_override() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("test-config.toml");

        fs::write(
            &config_path,
            r#"
            [docs]
            build_file = "phing/main.xml"
            build_dir = "dist"
            "#,
        )
        .unwrap();

        let config = load_config(Some(config_path.to_str().unwrap())).unwrap();

        assert_eq!(config.docs.build_file, "phing/main.xml");
        assert_eq!(config.docs.build_dir, "dist");
    }

    #[test]
    fn test_load_config_with_wrappers() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("test-config.toml");

        fs::write(
            &config_path,
            r#"
            [wrappers.release]
            description = "Package a release"

            [[wrappers.release.properties]]
            name = "release.format"
            value = "tar.gz"
            "#,
        )
        .unwrap();

        let config = load_config(Some(config_path.to_str().unwrap())).unwrap();

        assert!(config.wrappers.contains_key("release"));
        let wrapper = config.wrappers.get("release").unwrap();
        assert_eq!(wrapper.properties[0].name, "release.format");
        assert!(wrapper.properties[0].description.is_empty());
    }

    #[test]
    fn test_env_override() {
        // A key no other test asserts on, since tests share the process env
        std::env::set_var("TARGETDOC_ICONS__CHECKLIST", "https://example.com/list.png");

        let config = load_config(None).unwrap();

        // Clean up before asserting so a failure does not leak the variable
        std::env::remove_var("TARGETDOC_ICONS__CHECKLIST");

        assert_eq!(config.icons.checklist, "https://example.com/list.png");
    }

    #[test]
    fn test_missing_override_file_uses_defaults() {
        let config = load_config(Some("/nonexistent/config.toml")).unwrap();

        assert_eq!(config.docs.build_dir, "build");
    }
}
