//! Common test utilities for targetdoc tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes `content` to `dir/name`, creating parent directories
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(&path, content).expect("Failed to write file");
    path
}

/// Creates a temporary directory holding a root build.xml
pub fn create_build_project(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = write_file(dir.path(), "build.xml", content);
    (dir, root)
}

/// Creates a project with the sample root build file and its imports
pub fn create_sample_project() -> (TempDir, PathBuf) {
    let (dir, root) = create_build_project(SAMPLE_ROOT);
    write_file(dir.path(), "phing/tests.xml", SAMPLE_TESTS);
    write_file(dir.path(), "phing/tools.xml", SAMPLE_UNNAMED);
    (dir, root)
}

/// Sample root build file importing two others
pub const SAMPLE_ROOT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project name="site" default="build-dev">
    <import file="phing/tests.xml"/>
    <import file="phing/tools.xml"/>

    <target name="build-dev" description="Build a development site" depends="install, test-unit"/>
    <target name="build-prod" description="Build a production site" depends="install"/>
    <target name="install" description="Install the site"/>
    <target name="cache-clear" description="Clear caches" hidden="true"/>
</project>
"#;

/// Imported build file with a deprecated target
pub const SAMPLE_TESTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project name="tests">
    <target name="test-unit" description="Run unit tests"/>
    <target name="test-run" description="Run all tests">
        <replacedby target="test-unit"/>
    </target>
</project>
"#;

/// Imported build file without a project name
pub const SAMPLE_UNNAMED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
    <target name="tool-a" description="First tool"/>
    <target name="tool-b" description="Second tool"/>
</project>
"#;
