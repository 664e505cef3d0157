//! Catalog Scroll - Main Entry Point
//!
//! Infinite-scroll product catalog desktop client

use std::sync::Arc;

use anyhow::Context as _;
use catalog_scroll::app::application::run_app;
use catalog_scroll::domain::CatalogConfig;
use catalog_scroll::helpers::get_or_create_data_dir;
use catalog_scroll::services::HttpPageFetcher;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Console plus daily rolling file under the data directory
///
/// The returned guard flushes the file writer on drop and must outlive the app.
fn init_logger() -> Option<WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let console = fmt::layer().with_timer(LocalTime::rfc_3339());

    let (file, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "catalog-scroll.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    guard
}

fn main() -> anyhow::Result<()> {
    let _guard = init_logger();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Catalog Scroll...");

    let config = CatalogConfig::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default config");
        CatalogConfig::default()
    });

    let fetcher = HttpPageFetcher::new(config.api_url.as_str(), config.request_timeout())
        .context("failed to build HTTP client")?;
    tracing::info!(endpoint = fetcher.endpoint(), "Catalog endpoint configured");

    run_app(config, Arc::new(fetcher));
    Ok(())
}
