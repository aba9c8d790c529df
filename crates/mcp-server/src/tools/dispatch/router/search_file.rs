use crate::tools::schemas::search_file::SearchFileRequest;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use super::error::{encode_json, search_error};

/// Search one file for a keyword. Arguments are already validated.
pub(in crate::tools::dispatch) async fn search_file(
    request: SearchFileRequest,
) -> Result<CallToolResult, McpError> {
    let SearchFileRequest {
        file_path,
        keyword,
        case_sensitive,
    } = request;

    match file_search::search_file(&file_path, &keyword, case_sensitive).await {
        Ok(result) => Ok(CallToolResult::success(vec![Content::text(encode_json(
            &result,
        )?)])),
        Err(err) => {
            log::warn!("search_file failed for '{file_path}': {err}");
            search_error(&err, &file_path, &keyword)
        }
    }
}
