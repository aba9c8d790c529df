use file_search::FileReadError;
use file_search_protocol::{serialize_json, SearchError};
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde::Serialize;

/// Dispatch failure: reported on the protocol error channel, never as content.
pub(in crate::tools::dispatch) fn unknown_tool(name: &str) -> McpError {
    McpError::invalid_params(format!("Unknown tool: {name}"), None)
}

pub(super) fn encode_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serialize_json(value).map_err(|err| {
        log::error!("Failed to serialize tool response: {err}");
        McpError::internal_error(format!("Failed to serialize tool response: {err}"), None)
    })
}

/// Runtime failure: a well-formed content block flagged as an error.
pub(super) fn search_error(
    err: &FileReadError,
    file_path: &str,
    keyword: &str,
) -> Result<CallToolResult, McpError> {
    let payload = SearchError {
        error: err.to_string(),
        file_path: file_path.to_string(),
        keyword: keyword.to_string(),
    };
    Ok(CallToolResult::error(vec![Content::text(encode_json(
        &payload,
    )?)]))
}
