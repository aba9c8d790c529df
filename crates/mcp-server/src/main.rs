//! File Search MCP Server
//!
//! Exposes keyword search over a single text file to AI agents via MCP protocol.
//!
//! ## Tools
//!
//! - `search_file` - Every line of a file containing a keyword, with 1-based line numbers
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "file-search": {
//!       "command": "file-search-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::env;

mod shutdown;
mod tools;

use shutdown::InterruptScope;
use tools::catalog;
use tools::FileSearchService;

fn print_help() {
    println!("File search MCP server");
    println!();
    println!("Usage: file-search-mcp [--print-tools|--version|--help]");
    println!();
    println!("Flags:");
    println!("  --print-tools  Print tool inventory as JSON and exit");
    println!("  --version      Print version and exit");
    println!("  --help         Print this help and exit");
    println!();
    println!("Relative file paths are resolved against the working directory.");
    println!("Set RUST_LOG to change log verbosity (logs go to stderr).");
}

fn handle_cli_args() -> Option<i32> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return None;
    }

    if args.len() == 1 {
        match args[0].as_str() {
            "--print-tools" => {
                let payload = catalog::tool_inventory_json(env!("CARGO_PKG_VERSION"));
                println!("{}", payload);
                return Some(0);
            }
            "--version" | "-V" => {
                println!("file-search-mcp {}", env!("CARGO_PKG_VERSION"));
                return Some(0);
            }
            "--help" | "-h" => {
                print_help();
                return Some(0);
            }
            _ => {}
        }
    }

    eprintln!("Unknown arguments: {}", args.join(" "));
    print_help();
    Some(2)
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(exit_code) = handle_cli_args() {
        std::process::exit(exit_code);
    }

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting file search MCP server on stdio");

    let interrupt = InterruptScope::install();
    let service = FileSearchService::new();
    let server = match service.serve_with_ct(stdio(), interrupt.token()).await {
        Ok(server) => server,
        Err(err) if interrupt.interrupted() => {
            log::info!("Interrupted before initialization ({err})");
            exit_after_interrupt(interrupt);
        }
        Err(err) => {
            log::error!("MCP server failed to start: {err}");
            return Err(err.into());
        }
    };

    let reason = server.waiting().await?;
    log::info!("File search MCP server stopped ({reason:?})");

    if interrupt.interrupted() {
        exit_after_interrupt(interrupt);
    }
    Ok(())
}

fn exit_after_interrupt(interrupt: InterruptScope) -> ! {
    // The stdin reader can stay parked in a blocking read and delay runtime shutdown.
    drop(interrupt);
    std::process::exit(0);
}
