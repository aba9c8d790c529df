//! File search MCP tool surface.
//!
//! Schemas, dispatch, and the per-tool handler live in separate submodules.

pub mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::FileSearchService;
