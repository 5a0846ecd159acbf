//! Restart watcher: turns credential changes into a shutdown request.
//!
//! The network stack only reads credentials at boot, so after `/configure`
//! or `/clear` the process has to go down and be brought back up by its
//! supervisor. The daemon feeds [`wait_for_restart`] into the HTTP server's
//! graceful shutdown.

use std::time::Duration;

use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;

use alarmhub_domain::event::Event;

/// Wait for the first event that requires a restart, then `delay`.
///
/// The delay leaves room for the HTTP response that triggered the change to
/// reach the client. Returns `None` if the bus closes first.
pub async fn wait_for_restart(mut events: Receiver<Event>, delay: Duration) -> Option<Event> {
    loop {
        match events.recv().await {
            Ok(event) if event.kind.requires_restart() => {
                tracing::info!(kind = ?event.kind, ?delay, "restart requested");
                tokio::time::sleep(delay).await;
                return Some(event);
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "restart watcher lagged behind the event bus");
            }
            Err(RecvError::Closed) => return None,
        }
    }
}
