//! Error types for targetdoc
//!
//! Provides structured error types with suggestions for common issues.

use serde::Serialize;
use thiserror::Error;

/// Main error type for documentation generation
#[derive(Error, Debug)]
pub enum DocError {
    /// Build file could not be read or is not well-formed XML
    #[error("Failed to parse build file {path}: {message}")]
    Parse { path: String, message: String },

    /// A target element lacks an attribute it must carry
    #[error("Target '{target}' in {path} is missing required attribute '{attribute}'")]
    MissingAttribute {
        path: String,
        target: String,
        attribute: String,
    },

    /// A wrapper table references a target that was not extracted
    #[error("Wrapper '{wrapper}' references unknown target '{reference}'")]
    MissingReference { wrapper: String, reference: String },

    /// A required configuration property is empty or absent
    #[error("Missing required property '{0}'")]
    RequiredPropertyMissing(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for documentation operations
pub type DocResult<T> = Result<T, DocError>;

impl DocError {
    pub(crate) fn parse(path: &std::path::Path, message: impl std::fmt::Display) -> Self {
        DocError::Parse {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn missing_attribute(
        path: &std::path::Path,
        target: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        DocError::MissingAttribute {
            path: path.display().to_string(),
            target: target.into(),
            attribute: attribute.into(),
        }
    }
}

/// Serializable error info for MCP responses
#[derive(Debug, Serialize, Clone)]
pub struct ErrorInfo {
    pub message: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&DocError> for ErrorInfo {
    fn from(err: &DocError) -> Self {
        let (error_type, suggestion) = match err {
            DocError::Parse { .. } => (
                "parse_error",
                Some("Check that the build file exists and is well-formed XML".to_string()),
            ),
            DocError::MissingAttribute { attribute, .. } if attribute == "depends" => (
                "missing_attribute",
                Some("Targets named build-* must declare a depends attribute".to_string()),
            ),
            DocError::MissingAttribute { .. } => ("missing_attribute", None),
            DocError::MissingReference { wrapper, .. } => (
                "missing_reference",
                Some(format!(
                    "Declare a '{}-build' target and make sure all of its dependencies exist",
                    wrapper
                )),
            ),
            DocError::RequiredPropertyMissing(name) => (
                "required_property_missing",
                Some(format!("Set docs.{} in your targetdoc configuration", name)),
            ),
            DocError::Io(_) => ("io_error", None),
        };

        ErrorInfo {
            message: err.to_string(),
            error_type: error_type.to_string(),
            suggestion,
        }
    }
}
