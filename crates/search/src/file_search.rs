use file_search_protocol::SearchResult;
use std::path::Path;

use crate::error::{FileReadError, Result};
use crate::path::resolve_absolute;
use crate::scan::scan_lines;

/// Search one file for `keyword` and report every matching line.
///
/// The file is checked for existence, read wholly into memory, then scanned once. The handle is
/// closed before this returns on every path.
pub async fn search_file(
    file_path: &str,
    keyword: &str,
    case_sensitive: bool,
) -> Result<SearchResult> {
    let path = Path::new(file_path);

    tokio::fs::metadata(path)
        .await
        .map_err(|err| FileReadError::from_io(file_path, err))?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| FileReadError::from_io(file_path, err))?;

    let matches = scan_lines(&content, keyword, case_sensitive);
    let resolved = resolve_absolute(path).map_err(|source| FileReadError::Io { source })?;

    log::debug!(
        "search_file {} (case_sensitive={case_sensitive}): {} matches",
        resolved.display(),
        matches.len()
    );

    Ok(SearchResult::new(
        resolved.to_string_lossy().into_owned(),
        keyword.to_string(),
        case_sensitive,
        matches,
    ))
}
