use rmcp::schemars;
use serde::Deserialize;

/// Arguments of the `search_file` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchFileRequest {
    /// File to search (absolute, or relative to the server's working directory)
    #[schemars(description = "Path to the file to search in")]
    pub file_path: String,

    #[schemars(description = "Keyword to search for in the file")]
    pub keyword: String,

    #[serde(default)]
    #[schemars(description = "Whether the search should be case-sensitive (default: false)")]
    pub case_sensitive: bool,
}
