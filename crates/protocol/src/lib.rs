//! Wire payloads returned by the `search_file` tool.
//!
//! Both payloads travel as a single text content block holding pretty-printed JSON. Key names are
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

/// One line that contains the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    /// 1-based line number
    pub line_number: usize,
    /// Original line text (never case-folded)
    pub content: String,
}

/// Successful search outcome.
///
/// Built through [`SearchResult::new`], so `success` is always `true` and `total_matches` equals
/// `matches.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    success: bool,
    /// Absolute path of the searched file
    pub file_path: String,
    pub keyword: String,
    pub case_sensitive: bool,
    pub total_matches: usize,
    pub matches: Vec<SearchMatch>,
}

impl SearchResult {
    pub fn new(
        file_path: String,
        keyword: String,
        case_sensitive: bool,
        matches: Vec<SearchMatch>,
    ) -> Self {
        Self {
            success: true,
            file_path,
            keyword,
            case_sensitive,
            total_matches: matches.len(),
            matches,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }
}

/// Runtime failure payload. `file_path` echoes the caller's input as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchError {
    pub error: String,
    pub file_path: String,
    pub keyword: String,
}

/// Stable pretty JSON (2-space indent) used for every content block.
pub fn serialize_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
