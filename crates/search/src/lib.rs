//! # File Search
//!
//! Keyword search over a single text file.
//!
//! ## Pipeline
//!
//! ```text
//! file path
//!     │
//!     ├──> metadata (exists? accessible?)
//!     │
//!     ├──> read whole file as UTF-8
//!     │
//!     └──> split on `\n`, substring match per line
//!            └─> SearchResult { matches, totalMatches, absolute filePath }
//! ```
//!
//! ## Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), file_search::FileReadError> {
//!     let result = file_search::search_file("notes.txt", "todo", false).await?;
//!     for m in &result.matches {
//!         println!("{}: {}", m.line_number, m.content);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod file_search;
mod path;
mod scan;

pub use error::{FileReadError, Result};
pub use file_search::search_file;
pub use path::resolve_absolute;
pub use scan::{scan_lines, KeywordMatcher};
