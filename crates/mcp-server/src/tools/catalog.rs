use serde_json::json;

use super::FileSearchService;

/// Tool inventory printed by `--print-tools`.
pub fn tool_inventory_json(version: &str) -> String {
    let tools = FileSearchService::new().tools();
    let payload = json!({
        "server": env!("CARGO_PKG_NAME"),
        "version": version,
        "tools": tools,
    });
    serde_json::to_string_pretty(&payload).unwrap_or_default()
}
