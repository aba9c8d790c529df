use rmcp::handler::server::tool::{ToolCallContext, ToolRouter};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_router, ErrorData as McpError, RoleServer, ServerHandler};

use super::schemas::search_file::SearchFileRequest;

mod router;

/// File search MCP service
#[derive(Clone)]
pub struct FileSearchService {
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl FileSearchService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Descriptors of every registered tool.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

impl Default for FileSearchService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl FileSearchService {
    /// Keyword search inside one file
    #[tool(
        description = "Search for a keyword in a specified file and return all matching lines with line numbers"
    )]
    pub async fn search_file(
        &self,
        Parameters(request): Parameters<SearchFileRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::search_file::search_file(request).await
    }
}

impl ServerHandler for FileSearchService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("File search server. Call 'search_file' with a filePath and keyword to get every matching line with its line number.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if !self.tool_router.has_route(request.name.as_ref()) {
            log::warn!("Rejected call to unknown tool '{}'", request.name);
            return Err(router::error::unknown_tool(&request.name));
        }

        let name = request.name.clone();
        let result = self
            .tool_router
            .call(ToolCallContext::new(self, request, context))
            .await;
        if let Err(err) = &result {
            log::warn!("Tool '{name}' failed: {}", err.message);
        }
        result
    }
}
