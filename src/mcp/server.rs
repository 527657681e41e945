//! MCP Server implementation
//!
//! Implements the MCP tools for targetdoc using rmcp SDK.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::model::{Implementation, ServerCapabilities, ServerInfo, ToolsCapability};
use rmcp::{tool, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::buildfile::{BuildFileInfo, BuildListProvider, Category, ImportWalker, Target};
use crate::config::{interpolate_config, Config};
use crate::docgen::DocGenerator;
use crate::error::{DocError, ErrorInfo};

/// MCP Server for targetdoc
#[derive(Clone)]
pub struct TargetdocServer {
    /// Configuration as loaded, before path interpolation
    config: Arc<Config>,
}

impl TargetdocServer {
    /// Create with a specific config
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Copy of the configuration with per-call overrides applied, then
    /// interpolated like the CLI does
    fn effective_config(&self, build_file: Option<String>, build_dir: Option<String>) -> Config {
        let mut config = Config::clone(&self.config);
        if let Some(build_file) = build_file {
            config.docs.build_file = build_file;
        }
        if let Some(build_dir) = build_dir {
            config.docs.build_dir = build_dir;
        }
        interpolate_config(&mut config);
        config
    }
}

impl Default for TargetdocServer {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

fn walker_for(config: &Config) -> ImportWalker {
    ImportWalker::new(&config.docs.build_file).with_properties(config.properties.clone())
}

// === Tool Parameter Types ===

/// Parameters for list_build_files tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListBuildFilesParams {
    /// Root build file (defaults to the configured docs.build_file)
    #[serde(default)]
    pub build_file: Option<String>,
}

/// Response from list_build_files tool
#[derive(Debug, Serialize)]
pub struct ListBuildFilesResponse {
    pub root: String,
    pub build_files: Vec<BuildFileInfo>,
}

/// Parameters for list_targets tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListTargetsParams {
    /// Root build file (defaults to the configured docs.build_file)
    #[serde(default)]
    pub build_file: Option<String>,

    /// Only return targets of this category (build, callback, deprecated, helper, wrapper)
    #[serde(default)]
    pub category: Option<String>,
}

/// Response from list_targets tool
#[derive(Debug, Serialize)]
pub struct ListTargetsResponse {
    pub root: String,
    pub total: usize,
    pub targets: Vec<Target>,
}

/// Parameters for generate_docs tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateDocsParams {
    /// Root build file (defaults to the configured docs.build_file)
    #[serde(default)]
    pub build_file: Option<String>,

    /// Build directory receiving docs/target-list.md (defaults to docs.build_dir)
    #[serde(default)]
    pub build_dir: Option<String>,

    /// Return the document without writing it
    #[serde(default)]
    pub dry_run: bool,
}

/// Response from generate_docs tool
#[derive(Debug, Serialize)]
pub struct GenerateDocsResponse {
    pub success: bool,
    /// Where the document was (or would be) written
    pub output: String,
    pub written: bool,
    pub targets: usize,
    pub sections: usize,
    pub wrappers: usize,
    /// Rendered document, only for dry runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Error response for tools
#[derive(Debug, Serialize)]
struct ToolError {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl ToolError {
    fn new(error: impl std::fmt::Display, suggestion: Option<String>) -> String {
        serde_json::to_string_pretty(&ToolError {
            success: false,
            error: error.to_string(),
            suggestion,
        })
        .unwrap_or_else(|_| format!("{{\"success\":false,\"error\":\"{}\"}}", error))
    }

    fn from_doc_error(err: &DocError) -> String {
        let info = ErrorInfo::from(err);
        Self::new(info.message, info.suggestion)
    }
}

fn parse_category(name: &str) -> Option<Category> {
    match name.to_lowercase().as_str() {
        "build" => Some(Category::Build),
        "callback" => Some(Category::Callback),
        "deprecated" => Some(Category::Deprecated),
        "helper" => Some(Category::Helper),
        "wrapper" => Some(Category::Wrapper),
        _ => None,
    }
}

// === MCP Tool Implementations ===

#[tool(tool_box)]
impl TargetdocServer {
    /// List the build files reachable from the root build file
    #[tool(
        description = "List build files reachable from the root Phing build file through <import>, with project names and import depth."
    )]
    pub async fn list_build_files(&self, #[tool(aggr)] params: ListBuildFilesParams) -> String {
        let config = self.effective_config(params.build_file, None);

        let build_files = match walker_for(&config).build_list() {
            Ok(b) => b,
            Err(e) => return ToolError::from_doc_error(&e),
        };

        let response = ListBuildFilesResponse {
            root: config.docs.build_file.clone(),
            build_files,
        };

        serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| ToolError::new(format!("Serialization error: {}", e), None))
    }

    /// List classified targets
    #[tool(
        description = "List every target of the build with its category (build, callback, deprecated, helper, wrapper), visibility and description."
    )]
    pub async fn list_targets(&self, #[tool(aggr)] params: ListTargetsParams) -> String {
        let filter = match params.category.as_deref() {
            None => None,
            Some(name) => match parse_category(name) {
                Some(c) => Some(c),
                None => {
                    return ToolError::new(
                        format!("Unknown category '{}'", name),
                        Some("Use one of: build, callback, deprecated, helper, wrapper".into()),
                    )
                }
            },
        };

        let config = self.effective_config(params.build_file, None);
        let generator = DocGenerator::new(&config);

        let (_, targets) = match generator.classify_targets(&walker_for(&config)) {
            Ok(r) => r,
            Err(e) => return ToolError::from_doc_error(&e),
        };

        let total = targets.len();
        let targets = targets
            .into_iter()
            .filter(|t| filter.is_none() || t.category == filter)
            .collect();

        let response = ListTargetsResponse {
            root: config.docs.build_file.clone(),
            total,
            targets,
        };

        serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| ToolError::new(format!("Serialization error: {}", e), None))
    }

    /// Generate the target documentation
    #[tool(
        description = "Generate the target documentation into {build_dir}/docs/target-list.md. Use dry_run to get the document without writing it."
    )]
    pub async fn generate_docs(&self, #[tool(aggr)] params: GenerateDocsParams) -> String {
        let config = self.effective_config(params.build_file, params.build_dir);
        let generator = DocGenerator::new(&config);
        let walker = walker_for(&config);

        let result = if params.dry_run {
            generator
                .check_requirements()
                .and_then(|_| generator.generate(&walker))
                .map(|docs| (config.docs.output_path(), docs))
        } else {
            generator.write(&walker)
        };

        let (output, docs): (PathBuf, _) = match result {
            Ok(r) => r,
            Err(e) => return ToolError::from_doc_error(&e),
        };

        let response = GenerateDocsResponse {
            success: true,
            output: output.display().to_string(),
            written: !params.dry_run,
            targets: docs.targets.len(),
            sections: docs.sections,
            wrappers: docs.wrappers,
            document: params.dry_run.then_some(docs.document),
        };

        serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| ToolError::new(format!("Serialization error: {}", e), None))
    }
}

#[tool(tool_box)]
impl ServerHandler for TargetdocServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "targetdoc".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "MCP server for documenting Phing build targets. Classifies targets across \
                 imported build files and renders docs/target-list.md."
                    .to_string(),
            ),
        }
    }
}
