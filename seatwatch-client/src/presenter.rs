//! Availability presenter - the polling loop
//!
//! Fetches a fresh snapshot on a fixed cadence and on demand, renders each
//! record, and hands the view models to the sink. A failed refresh is logged
//! and dropped; the previous presentation state stays up until the next tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::http::AvailabilitySource;
use crate::render::{CardView, OptionView};
use crate::sink::AvailabilitySink;

/// Periodic availability poller
///
/// Each refresh cycle is stateless and independent: the outcome depends only
/// on the snapshot fetched in that cycle.
pub struct AvailabilityPresenter {
    source: Arc<dyn AvailabilitySource>,
    sink: Arc<dyn AvailabilitySink>,
    poll_interval: Duration,
}

/// Handle to a spawned presenter
///
/// Dropping the handle does not stop the task; call [`stop`](Self::stop).
pub struct PresenterHandle {
    refresh: Arc<Notify>,
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl PresenterHandle {
    /// Request an immediate refresh ahead of the next tick.
    ///
    /// The hook for user-driven triggers such as time-range form edits.
    /// Requests arriving while a refresh is in flight coalesce into one.
    pub fn refresh_now(&self) {
        self.refresh.notify_one();
    }

    /// Stop the presenter. An in-flight refresh finishes first.
    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    /// Wait for the presenter task to exit.
    pub async fn stopped(self) {
        let _ = self.handle.await;
    }
}

impl AvailabilityPresenter {
    /// Create a presenter over an injected source and sink.
    pub fn new(
        source: Arc<dyn AvailabilitySource>,
        sink: Arc<dyn AvailabilitySink>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            sink,
            poll_interval,
        }
    }

    /// Spawn the polling task and return its handle.
    ///
    /// The first refresh runs immediately; subsequent refreshes run every
    /// poll interval until [`PresenterHandle::stop`] is called.
    pub fn spawn(self) -> PresenterHandle {
        let refresh = Arc::new(Notify::new());
        let shutdown = CancellationToken::new();

        let notify = refresh.clone();
        let token = shutdown.clone();
        let handle = tokio::spawn(self.run(notify, token));

        PresenterHandle {
            refresh,
            shutdown,
            handle,
        }
    }

    async fn run(self, refresh: Arc<Notify>, shutdown: CancellationToken) {
        tracing::info!(
            interval_ms = self.poll_interval.as_millis() as u64,
            "Availability presenter started"
        );

        // First tick fires immediately
        let mut ticker = interval(self.poll_interval);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("Availability presenter shutting down");
                    break;
                }

                _ = ticker.tick() => {
                    self.refresh().await;
                }

                _ = refresh.notified() => {
                    self.refresh().await;
                }
            }
        }
    }

    /// One refresh cycle: fetch, render, apply.
    async fn refresh(&self) {
        let zones = match self.source.availability().await {
            Ok(zones) => zones,
            Err(e) => {
                tracing::error!("Availability refresh failed: {e}");
                return;
            }
        };

        for zone in &zones {
            self.sink
                .apply_card(zone.id, &CardView::from_zone(zone))
                .await;
            self.sink
                .apply_option(zone.id, &OptionView::from_zone(zone))
                .await;
        }

        tracing::debug!(zones = zones.len(), "Availability updated");
    }
}
