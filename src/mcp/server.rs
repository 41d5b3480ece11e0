use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, JsonObject,
        ListResourceTemplatesResult, ListResourcesResult, ListToolsResult, PaginatedRequestParam,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};

use crate::config::ServerConfig;
use crate::handlers;
use crate::registry::Registry;

/// MCP server backed by an immutable [`Registry`].
#[derive(Clone)]
pub struct DemoMcpServer {
    registry: Arc<Registry>,
    config: Arc<ServerConfig>,
}

impl DemoMcpServer {
    /// Server with every demo operation registered.
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(
            handlers::registry()?,
            ServerConfig::default(),
        ))
    }

    pub fn with_registry(registry: Registry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Invoke a tool by name, as `tools/call` does.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.registry.call_tool(name, arguments)?)
    }

    /// Read a resource by URI, as `resources/read` does.
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        Ok(self.registry.read_resource(uri)?)
    }
}

impl ServerHandler for DemoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
                ..Default::default()
            },
            instructions: Some(self.config.instructions(&self.registry)),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.registry.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(&request.name, request.arguments).await
    }

    // Both resources are templates; there are no concrete instances to list.
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(Vec::new()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            self.registry.resource_templates(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read(&request.uri).await
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = DemoMcpServer::new()?;
            tracing::info!(
                name = %service.config().name,
                version = %service.config().version,
                operations = service.registry().len(),
                "starting MCP server on stdio"
            );
            let server = service.serve(rmcp::transport::stdio()).await?;
            tracing::info!("waiting for client requests");
            let reason = server.waiting().await?;
            tracing::info!(?reason, "MCP server stopped");
            Ok(())
        })
}
