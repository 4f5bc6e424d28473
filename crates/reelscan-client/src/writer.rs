//! Debounced scan-area persistence.
//!
//! While the operator drags a scan-area edge the UI produces a stream of
//! updated areas, many per second. Only the latest one matters to the
//! device, so writes are coalesced: a PUT goes out once the stream has been
//! quiet for the debounce interval, and a final flush happens on shutdown.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use reelscan_models::ScanArea;

use crate::client::SetupClient;

/// Default quiet interval before a pending scan area is written.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Coalescing writer for scan-area updates.
pub struct ScanAreaWriter {
    tx: watch::Sender<Option<ScanArea>>,
    task: JoinHandle<()>,
}

impl ScanAreaWriter {
    /// Spawn a writer with the default debounce interval.
    pub fn spawn(client: SetupClient) -> Self {
        Self::with_debounce(client, DEFAULT_DEBOUNCE)
    }

    /// Spawn a writer with a custom debounce interval.
    pub fn with_debounce(client: SetupClient, debounce: Duration) -> Self {
        let (tx, mut rx) = watch::channel(None::<ScanArea>);

        let task = tokio::spawn(async move {
            loop {
                if rx.changed().await.is_err() {
                    break;
                }

                // restart the quiet period on every further update
                let mut open = true;
                loop {
                    tokio::select! {
                        changed = rx.changed() => {
                            if changed.is_err() {
                                open = false;
                                break;
                            }
                        }
                        _ = tokio::time::sleep(debounce) => break,
                    }
                }

                let latest = *rx.borrow_and_update();
                if let Some(scan_area) = latest {
                    if let Err(err) = client.set_scan_area(&scan_area).await {
                        warn!(error = %err, "Failed to persist scan area");
                    }
                }

                if !open {
                    break;
                }
            }
        });

        Self { tx, task }
    }

    /// Queue a scan area for writing. Overwrites any not-yet-written value.
    pub fn submit(&self, scan_area: ScanArea) {
        let _ = self.tx.send(Some(scan_area));
    }

    /// Flush the pending value (if any) and stop the writer task.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}
