#![cfg(unix)]

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};

fn locate_file_search_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_file-search-mcp") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("file-search-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    anyhow::bail!("failed to locate file-search-mcp binary")
}

fn spawn_server() -> Result<Child> {
    let bin = locate_file_search_mcp_bin()?;
    Command::new(bin)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .context("spawn mcp server")
}

async fn send_sigint(child: &Child) -> Result<()> {
    let pid = child.id().context("server already exited")?;
    let status = Command::new("kill")
        .args(["-INT", &pid.to_string()])
        .status()
        .await
        .context("run kill")?;
    anyhow::ensure!(status.success(), "kill -INT failed: {status}");
    Ok(())
}

async fn wait_for_exit_code(child: &mut Child) -> Result<Option<i32>> {
    let status = tokio::time::timeout(Duration::from_secs(10), child.wait())
        .await
        .context("timeout waiting for server exit")?
        .context("wait for server")?;
    Ok(status.code())
}

#[tokio::test]
async fn interrupt_before_initialize_exits_cleanly() -> Result<()> {
    let mut child = spawn_server()?;

    // Let the signal watcher install before interrupting; stdin stays open and silent.
    tokio::time::sleep(Duration::from_millis(1000)).await;
    send_sigint(&child).await?;

    assert_eq!(wait_for_exit_code(&mut child).await?, Some(0));
    Ok(())
}

#[tokio::test]
async fn interrupt_after_initialize_exits_cleanly() -> Result<()> {
    let mut child = spawn_server()?;
    let mut stdin = child.stdin.take().context("server stdin")?;
    let stdout = child.stdout.take().context("server stdout")?;
    let mut lines = BufReader::new(stdout).lines();

    let initialize = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "interrupt-test", "version": "0.0.0" }
        }
    });
    stdin
        .write_all(format!("{initialize}\n").as_bytes())
        .await
        .context("write initialize")?;
    stdin.flush().await.context("flush initialize")?;

    let response = tokio::time::timeout(Duration::from_secs(10), lines.next_line())
        .await
        .context("timeout waiting for initialize response")?
        .context("read initialize response")?
        .context("server closed stdout before responding")?;
    let response: serde_json::Value =
        serde_json::from_str(&response).context("initialize response is not JSON")?;
    assert_eq!(response.get("id").and_then(|v| v.as_u64()), Some(1));
    assert!(response.get("result").is_some(), "got {response}");

    let initialized = serde_json::json!({
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    });
    stdin
        .write_all(format!("{initialized}\n").as_bytes())
        .await
        .context("write initialized")?;
    stdin.flush().await.context("flush initialized")?;

    tokio::time::sleep(Duration::from_millis(300)).await;
    send_sigint(&child).await?;

    assert_eq!(wait_for_exit_code(&mut child).await?, Some(0));
    drop(stdin);
    Ok(())
}
