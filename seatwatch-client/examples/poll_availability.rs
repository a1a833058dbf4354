//! Polls a local booking server and logs each zone's rendered state.
//!
//! Run with the dev server on port 8000:
//!
//! ```bash
//! cargo run --example poll_availability
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use seatwatch_client::{
    AvailabilityPresenter, AvailabilitySink, CardView, ClientConfig, OptionView,
};

/// Sink that logs instead of patching a page.
struct LogSink;

#[async_trait]
impl AvailabilitySink for LogSink {
    async fn apply_card(&self, zone_id: i64, view: &CardView) {
        tracing::info!(
            zone_id,
            seats = %view.seats_text,
            status = view.status_text,
            width = view.progress_percent,
            "card"
        );
    }

    async fn apply_option(&self, zone_id: i64, view: &OptionView) {
        tracing::info!(zone_id, label = %view.label, "option");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,seatwatch_client=debug".into()),
        )
        .init();

    let config = ClientConfig::default().with_poll_interval(Duration::from_secs(30));
    let client = Arc::new(config.build_http_client());

    let presenter =
        AvailabilityPresenter::new(client, Arc::new(LogSink), config.poll_interval);
    let handle = presenter.spawn();

    tokio::signal::ctrl_c().await.expect("ctrl-c handler");
    handle.stop();
    handle.stopped().await;
}
