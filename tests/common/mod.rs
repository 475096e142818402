//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use mcp_relay::{RelayConfig, RelayServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Request targets (path + query) seen by a mock upstream, in arrival order.
pub type Seen = Arc<Mutex<Vec<String>>>;

/// Start a programmable mock upstream on an ephemeral port.
///
/// `f` receives the request target (e.g. `/api/wellbeing/mcp/status`) and
/// returns the status code and JSON body to answer with.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> (SocketAddr, Seen)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let seen_task = seen.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let seen = seen_task.clone();
            tokio::spawn(async move {
                let target = read_request_target(&mut socket).await;
                seen.lock().unwrap().push(target.clone());

                let (status, body) = f(target).await;
                let reason = StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown");

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, seen)
}

/// Start a mock upstream that always returns the same status and body.
#[allow(dead_code)]
pub async fn start_mock_upstream(status: u16, body: &'static str) -> (SocketAddr, Seen) {
    start_programmable_upstream(move |_| async move { (status, body.to_string()) }).await
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Start the relay on an ephemeral loopback port, pointed at `upstream`.
///
/// Keep the returned [`Shutdown`] alive for as long as the relay is needed.
pub async fn start_relay(upstream: SocketAddr) -> (SocketAddr, Shutdown) {
    start_relay_with(upstream, RelayConfig::default()).await
}

/// Like [`start_relay`], but starting from a caller-tuned `config`. The
/// listener and upstream address are always overridden.
pub async fn start_relay_with(upstream: SocketAddr, mut config: RelayConfig) -> (SocketAddr, Shutdown) {
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.upstream.base_url = format!("http://{}", upstream);

    let listener = TcpListener::bind(config.listener.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = RelayServer::new(config);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn read_request_target(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    String::from_utf8_lossy(&buf)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string()
}
