//! Programmatic stop for running relays.

use tokio::sync::broadcast;

/// Owner side: stops every relay holding one of its [`ShutdownSignal`]s,
/// either explicitly via [`Shutdown::trigger`] or implicitly when dropped.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

/// Receiver side handed to [`RelayServer::run`](crate::http::RelayServer::run).
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        // No receivers just means nothing is running.
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once a stop is requested or the owning [`Shutdown`] is gone.
    pub async fn requested(mut self) {
        match self.rx.recv().await {
            Ok(()) => tracing::debug!("Shutdown requested"),
            Err(_) => tracing::debug!("Shutdown owner dropped"),
        }
    }
}
