// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::{sleep, Instant};

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// How often the drain checks the active connection count
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept loop.
///
/// Once `state.shutdown_signal` is notified the listener is closed and the
/// loop waits for accepted connections to finish, at most
/// `max(read_timeout, write_timeout)`, before returning.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    active_connections: Arc<AtomicUsize>,
) {
    let shutdown = Arc::clone(&state.shutdown_signal);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_shutdown();

    let perf = &state.config.performance;
    let grace = Duration::from_secs(perf.read_timeout.max(perf.write_timeout));
    drain_connections(&active_connections, grace).await;
}

/// Wait until no connection is active or `grace` has elapsed
async fn drain_connections(active_connections: &AtomicUsize, grace: Duration) {
    let deadline = Instant::now() + grace;
    logger::log_info(&format!(
        "Waiting up to {}s for {} connection(s) to finish",
        grace.as_secs(),
        active_connections.load(Ordering::SeqCst)
    ));
    loop {
        let remaining = active_connections.load(Ordering::SeqCst);
        if remaining == 0 {
            logger::log_info("All connections drained");
            return;
        }
        if Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown grace period expired with {remaining} connection(s) still open"
            ));
            return;
        }
        sleep(DRAIN_POLL_INTERVAL).await;
    }
}
