//! Operation registry: tools and resources, keyed by name.
//!
//! The registry is built once at startup and is read-only afterwards.
//! Every dispatch goes through the same steps:
//!
//! 1. resolve the operation (exact name for tools, template match for resources)
//! 2. validate the input against the declared schema
//! 3. run the handler inside the logging decorator, catching panics
//!
//! ## Module Structure
//!
//! - `error`: registration and dispatch errors
//! - `schema`: tool input schemas and argument validation
//! - `template`: URI template parsing and matching

mod error;
mod schema;
mod template;

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rmcp::model::{
    CallToolResult, Content, JsonObject, ReadResourceResult, ResourceContents, ResourceTemplate,
    Tool,
};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::logging::logged;

pub use error::{DispatchError, RegistrationError};
pub use schema::{Field, FieldType, Schema};
pub use template::{TemplateError, UriTemplate, Variables};

/// MIME type of every resource body.
pub const TEXT_MIME_TYPE: &str = "text/plain";

/// The two kinds of operations the registry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Tool,
    Resource,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tool => f.write_str("tool"),
            Self::Resource => f.write_str("resource"),
        }
    }
}

/// Human-facing metadata shown to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

type ToolFn = dyn Fn(JsonObject) -> Result<String, DispatchError> + Send + Sync;
type ResourceFn = dyn Fn(&Variables) -> anyhow::Result<String> + Send + Sync;

struct ToolEntry {
    name: String,
    metadata: Metadata,
    schema: Schema,
    input_schema: Arc<JsonObject>,
    handler: Box<ToolFn>,
}

struct ResourceEntry {
    name: String,
    metadata: Metadata,
    template: UriTemplate,
    descriptor: ResourceTemplate,
    handler: Box<ResourceFn>,
}

/// Summary of one registered operation, as printed by `demo-mcp list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSummary {
    pub kind: OperationKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_template: Option<String>,
}

/// Registry of every tool and resource the server exposes.
#[derive(Default)]
pub struct Registry {
    tools: Vec<ToolEntry>,
    resources: Vec<ResourceEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool whose arguments deserialize into `P`.
    ///
    /// The input schema is generated from `P`. Calls are validated against it
    /// before `handler` runs; an `Err` from the handler becomes a
    /// [`DispatchError::Handler`].
    pub fn register_tool<P, F>(
        &mut self,
        name: &str,
        metadata: Metadata,
        handler: F,
    ) -> Result<&mut Self, RegistrationError>
    where
        P: DeserializeOwned + JsonSchema + 'static,
        F: Fn(P) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.ensure_unique_name(name)?;
        let (schema, input_schema) = Schema::for_type::<P>(name)?;

        let operation = name.to_string();
        let handler = move |args: JsonObject| {
            let params: P = serde_json::from_value(Value::Object(args)).map_err(|e| {
                DispatchError::invalid_argument(&operation, "arguments", e.to_string())
            })?;
            handler(params).map_err(|e| DispatchError::handler(&operation, format!("{:#}", e)))
        };

        self.tools.push(ToolEntry {
            name: name.to_string(),
            metadata,
            schema,
            input_schema: Arc::new(input_schema),
            handler: Box::new(handler),
        });
        Ok(self)
    }

    /// Register a resource addressed by `uri_template`.
    ///
    /// The handler receives the placeholder values extracted from the
    /// requested URI.
    pub fn register_resource<F>(
        &mut self,
        name: &str,
        uri_template: &str,
        metadata: Metadata,
        handler: F,
    ) -> Result<&mut Self, RegistrationError>
    where
        F: Fn(&Variables) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.ensure_unique_name(name)?;
        let template =
            UriTemplate::parse(uri_template).map_err(|source| RegistrationError::InvalidTemplate {
                template: uri_template.to_string(),
                source,
            })?;
        let shape = template.shape();
        if self.resources.iter().any(|r| r.template.shape() == shape) {
            return Err(RegistrationError::DuplicateTemplate(
                uri_template.to_string(),
            ));
        }

        let descriptor = resource_template_descriptor(name, &template, &metadata)?;
        self.resources.push(ResourceEntry {
            name: name.to_string(),
            metadata,
            template,
            descriptor,
            handler: Box::new(handler),
        });
        Ok(self)
    }

    fn ensure_unique_name(&self, name: &str) -> Result<(), RegistrationError> {
        if self.has_tool(name) || self.has_resource(name) {
            return Err(RegistrationError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name == name)
    }

    pub fn has_resource(&self, name: &str) -> bool {
        self.resources.iter().any(|r| r.name == name)
    }

    /// Total number of registered operations.
    pub fn len(&self) -> usize {
        self.tools.len() + self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tool descriptors for `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools
            .iter()
            .map(|entry| {
                let mut tool = Tool::new(
                    entry.name.clone(),
                    entry.metadata.description.clone().unwrap_or_default(),
                    entry.input_schema.clone(),
                );
                tool.title = entry.metadata.title.clone();
                tool
            })
            .collect()
    }

    /// Resource template descriptors for `resources/templates/list`.
    pub fn resource_templates(&self) -> Vec<ResourceTemplate> {
        self.resources.iter().map(|r| r.descriptor.clone()).collect()
    }

    /// Every operation in registration order, tools first.
    pub fn operations(&self) -> Vec<OperationSummary> {
        let tools = self.tools.iter().map(|t| OperationSummary {
            kind: OperationKind::Tool,
            name: t.name.clone(),
            title: t.metadata.title.clone(),
            description: t.metadata.description.clone(),
            arguments: Some(t.schema.clone()),
            uri_template: None,
        });
        let resources = self.resources.iter().map(|r| OperationSummary {
            kind: OperationKind::Resource,
            name: r.name.clone(),
            title: r.metadata.title.clone(),
            description: r.metadata.description.clone(),
            arguments: None,
            uri_template: Some(r.template.to_string()),
        });
        tools.chain(resources).collect()
    }

    /// Validate and run a tool, returning its single text block.
    ///
    /// Missing `arguments` are treated as an empty object.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, DispatchError> {
        let entry = self
            .tools
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;
        let args = arguments.unwrap_or_default();

        if let Err(err) = entry.schema.validate(name, &args) {
            tracing::warn!(operation = name, error = %err, "rejected tool call");
            return Err(err);
        }

        let input = Value::Object(args.clone());
        let text = logged(OperationKind::Tool, name, &input, || {
            catch_panic(name, || (entry.handler)(args))
        })?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Resolve `uri` against the registered templates and run the first match.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, DispatchError> {
        let (entry, vars) = self
            .resources
            .iter()
            .find_map(|r| r.template.matches(uri).map(|vars| (r, vars)))
            .ok_or_else(|| DispatchError::UnknownResource(uri.to_string()))?;

        let name = entry.name.as_str();
        let input = json!({ "uri": uri, "variables": vars });
        let text = logged(OperationKind::Resource, name, &input, || {
            catch_panic(name, || {
                (entry.handler)(&vars).map_err(|e| DispatchError::handler(name, format!("{:#}", e)))
            })
        })?;
        let mut contents = ResourceContents::text(text, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(TEXT_MIME_TYPE.to_string());
        }
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

fn catch_panic<F>(operation: &str, f: F) -> Result<String, DispatchError>
where
    F: FnOnce() -> Result<String, DispatchError>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "handler panicked".to_string());
        Err(DispatchError::handler(
            operation,
            format!("panicked: {}", message),
        ))
    })
}

fn resource_template_descriptor(
    name: &str,
    template: &UriTemplate,
    metadata: &Metadata,
) -> Result<ResourceTemplate, RegistrationError> {
    let mut raw = json!({
        "uriTemplate": template.as_str(),
        "name": name,
        "mimeType": TEXT_MIME_TYPE,
    });
    if let Some(title) = &metadata.title {
        raw["title"] = json!(title);
    }
    if let Some(description) = &metadata.description {
        raw["description"] = json!(description);
    }
    serde_json::from_value(raw).map_err(|source| RegistrationError::Descriptor {
        operation: name.to_string(),
        source,
    })
}
