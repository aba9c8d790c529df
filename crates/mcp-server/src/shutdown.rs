use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancellation scope tied to SIGINT.
///
/// The token is handed to the MCP service; an interrupt cancels it, which closes the transport.
/// Dropping the scope stops the signal watcher.
pub struct InterruptScope {
    token: CancellationToken,
    watcher: JoinHandle<()>,
}

impl InterruptScope {
    pub fn install() -> Self {
        let token = CancellationToken::new();
        let watcher = tokio::spawn(watch_interrupt(token.clone()));
        Self { token, watcher }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn interrupted(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for InterruptScope {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

async fn watch_interrupt(token: CancellationToken) {
    tokio::select! {
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                log::info!("Interrupt received, closing transport");
                token.cancel();
            }
            Err(err) => log::error!("Failed to listen for interrupt: {err}"),
        },
        _ = token.cancelled() => {}
    }
}
