//! Reads one stream batch event (JSON) from the path given as the first
//! argument, or stdin, and prints the batch response on stdout.

use anyhow::Context;
use fingercount_consumer::{process_batch, StreamBatchEvent};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing (stderr; stdout carries the response) ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fingercount_consumer=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    // --- Input ---
    let raw = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read(&path)
            .await
            .with_context(|| format!("failed to read batch event from {path}"))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("failed to read batch event from stdin")?;
            buf
        }
    };

    let event: StreamBatchEvent =
        serde_json::from_slice(&raw).context("batch event is not valid JSON")?;
    tracing::debug!(records = event.records().len(), "Batch received");

    let response = process_batch(&event);
    tracing::info!(processed = response.processed, "Batch handled");

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
