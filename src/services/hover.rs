//! Debounced crosshair-hover event fetching.
//!
//! While the viewport pans, hit-testing fires on every pointer sample;
//! fetching per sample would hammer the upstream API. The watcher debounces:
//! each newly detected star cancels the previous pending fetch and schedules
//! a new one after a short delay, and a result is only delivered if its date
//! still matches the latest detection. Stale responses are discarded, never
//! allowed to overwrite a newer selection.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::NasaClient;
use crate::models::{DayEvents, StarPoint};

/// Default settle time before a detected star triggers a fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

struct Inner {
    /// Date of the latest detected star; results for any other date are stale
    current_date: Option<String>,
    /// Pending delayed fetch, aborted on every new detection
    pending: Option<JoinHandle<()>>,
}

/// Watches crosshair detections and turns stable ones into event fetches.
///
/// Resolved [`DayEvents`] are delivered through the channel returned by
/// [`HoverWatcher::new`].
pub struct HoverWatcher {
    client: Arc<NasaClient>,
    debounce: Duration,
    inner: Arc<Mutex<Inner>>,
    events_tx: UnboundedSender<DayEvents>,
}

impl HoverWatcher {
    /// Create a watcher and the receiver its results arrive on.
    pub fn new(
        client: Arc<NasaClient>,
        debounce: Duration,
    ) -> (Self, UnboundedReceiver<DayEvents>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            client,
            debounce,
            inner: Arc::new(Mutex::new(Inner {
                current_date: None,
                pending: None,
            })),
            events_tx,
        };
        (watcher, events_rx)
    }

    /// Report the current hit-test result.
    ///
    /// `Some(star)` with a new date cancels any pending fetch and schedules
    /// a debounced one; re-observing the same star is a no-op. `None`
    /// clears the hover state entirely.
    pub fn observe(&self, star: Option<&StarPoint>) {
        let Some(star) = star else {
            self.clear();
            return;
        };

        let mut inner = self.inner.lock();
        if inner.current_date.as_deref() == Some(star.date.as_str()) {
            return;
        }

        if let Some(pending) = inner.pending.take() {
            pending.abort();
        }
        inner.current_date = Some(star.date.clone());

        let date = star.date.clone();
        let client = Arc::clone(&self.client);
        let shared = Arc::clone(&self.inner);
        let events_tx = self.events_tx.clone();
        let debounce = self.debounce;

        inner.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let events = client.events_for_date(&date).await;

            let still_current = shared.lock().current_date.as_deref() == Some(date.as_str());
            if still_current {
                let _ = events_tx.send(events);
            } else {
                debug!(%date, "discarding stale hover result");
            }
        }));
    }

    /// Cancel any pending fetch and forget the current detection.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        if let Some(pending) = inner.pending.take() {
            pending.abort();
        }
        inner.current_date = None;
    }

    /// Date key of the star currently under observation, if any.
    pub fn current_date(&self) -> Option<String> {
        self.inner.lock().current_date.clone()
    }
}
