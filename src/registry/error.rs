//! Error types for registration and dispatch.
//!
//! Registration errors only happen while the registry is being built at
//! startup. Dispatch errors are reported back to the caller in place of a
//! result and are never fatal to the process.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use super::template::TemplateError;

/// Errors raised while building the registry.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Tool and resource names share one namespace.
    #[error("operation `{0}` is already registered")]
    DuplicateName(String),

    #[error("URI template `{0}` is already registered")]
    DuplicateTemplate(String),

    #[error("invalid URI template `{template}`: {source}")]
    InvalidTemplate {
        template: String,
        #[source]
        source: TemplateError,
    },

    #[error("unsupported input schema for `{operation}`: {reason}")]
    InvalidSchema { operation: String, reason: String },

    #[error("failed to build descriptor for `{operation}`: {source}")]
    Descriptor {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while serving a tool call or resource read.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An argument was missing or had the wrong type. The handler never ran.
    #[error("invalid argument `{field}` for `{operation}`: {reason}")]
    InvalidArgument {
        operation: String,
        field: String,
        reason: String,
    },

    #[error("tool not found: {0}")]
    UnknownTool(String),

    #[error("no resource matches URI: {0}")]
    UnknownResource(String),

    /// The handler returned an error or panicked.
    #[error("`{operation}` failed: {message}")]
    Handler { operation: String, message: String },
}

impl DispatchError {
    pub fn invalid_argument(
        operation: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            operation: operation.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn handler(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// True when the failure was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Handler { .. })
    }
}

impl From<DispatchError> for McpError {
    fn from(err: DispatchError) -> Self {
        let message = err.to_string();
        match err {
            DispatchError::InvalidArgument { .. } | DispatchError::UnknownTool(_) => {
                McpError::invalid_params(message, None)
            }
            DispatchError::UnknownResource(_) => McpError::resource_not_found(message, None),
            DispatchError::Handler { .. } => McpError::internal_error(message, None),
        }
    }
}
