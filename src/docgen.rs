//! Documentation generation pipeline
//!
//! build list -> extract -> classify -> render -> one document on disk.
//! Every step before the final write is free of side effects, so a failing
//! run leaves any previously generated document untouched.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::buildfile::{classify, extract_targets, BuildFileInfo, BuildListProvider, Target};
use crate::config::Config;
use crate::error::{DocError, DocResult};
use crate::render::{build_sections, build_wrapper_blocks, TreeRenderer, WrapperRenderer};

/// Outcome of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDocs {
    /// Build files in traversal order
    pub build_files: Vec<BuildFileInfo>,
    /// Every target with its category assigned
    pub targets: Vec<Target>,
    /// Number of build file sections in the document
    pub sections: usize,
    /// Number of wrapper blocks in the document
    pub wrappers: usize,
    /// The rendered document
    #[serde(skip)]
    pub document: String,
}

/// Runs the documentation pipeline for one configuration
pub struct DocGenerator<'a> {
    config: &'a Config,
}

impl<'a> DocGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Fail when a property the pipeline cannot run without is empty
    ///
    /// # Errors
    /// * `DocError::RequiredPropertyMissing` - `build_file` or `build_dir` is empty
    pub fn check_requirements(&self) -> DocResult<()> {
        let docs = &self.config.docs;
        for (name, value) in [("build_file", &docs.build_file), ("build_dir", &docs.build_dir)] {
            if value.trim().is_empty() {
                return Err(DocError::RequiredPropertyMissing(name.to_string()));
            }
        }
        Ok(())
    }

    /// Extract and classify the targets of every listed build file
    pub fn classify_targets(
        &self,
        provider: &dyn BuildListProvider,
    ) -> DocResult<(Vec<BuildFileInfo>, Vec<Target>)> {
        let build_files = provider.build_list()?;
        let extraction = extract_targets(&build_files)?;

        let wrappers: HashSet<String> = self.config.wrappers.keys().cloned().collect();
        let targets = classify(extraction.targets, &extraction.referenced, &wrappers);

        tracing::debug!(
            "Classified {} target(s) from {} build file(s)",
            targets.len(),
            build_files.len()
        );
        Ok((build_files, targets))
    }

    /// Produce the document without writing it
    ///
    /// Wrapper blocks come first, followed by one section per build file.
    pub fn generate(&self, provider: &dyn BuildListProvider) -> DocResult<GeneratedDocs> {
        let (build_files, targets) = self.classify_targets(provider)?;

        let blocks = build_wrapper_blocks(&self.config.wrappers, &targets)?;
        let sections = build_sections(&build_files, &targets, &self.config.docs.skip_projects);

        let icons = &self.config.icons;
        let mut document = WrapperRenderer::new(icons).render(&blocks);
        document.push_str(&TreeRenderer::new(icons).render(&sections));

        Ok(GeneratedDocs {
            build_files,
            targets,
            sections: sections.len(),
            wrappers: blocks.len(),
            document,
        })
    }

    /// Generate the document and write it to `{build_dir}/docs/target-list.md`
    ///
    /// Any existing document is overwritten. Nothing is written on error.
    pub fn write(&self, provider: &dyn BuildListProvider) -> DocResult<(PathBuf, GeneratedDocs)> {
        self.check_requirements()?;
        let docs = self.generate(provider)?;
        let path = self.config.docs.output_path();
        write_document(&path, &docs.document)?;

        tracing::info!(
            "Wrote {} ({} section(s), {} wrapper(s))",
            path.display(),
            docs.sections,
            docs.wrappers
        );
        Ok((path, docs))
    }
}

/// Write the whole document in one call, creating parent directories
pub fn write_document(path: &Path, document: &str) -> DocResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document)?;
    Ok(())
}
