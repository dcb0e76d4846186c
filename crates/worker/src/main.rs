use anyhow::Context;
use fingercount_events::{KinesisSink, PublisherConfig, RateLimitedPublisher};
use fingercount_pipeline::{open_source, run_capture_loop, CaptureConfig};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "fingercount_worker=debug,fingercount_pipeline=info,fingercount_events=info".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let publisher_config = PublisherConfig::from_env().context("invalid publisher configuration")?;
    let capture_config = CaptureConfig::from_env().context("invalid capture configuration")?;
    tracing::info!(
        stream = %publisher_config.stream_name,
        region = %publisher_config.region,
        min_interval_ms = publisher_config.min_interval.as_millis() as u64,
        mirrored = capture_config.mirrored,
        source = ?capture_config.source,
        "Loaded configuration"
    );

    // --- Landmark source ---
    let mut source = open_source(&capture_config.source)
        .await
        .context("landmark source unavailable")?;

    // --- Publisher ---
    let sink = KinesisSink::from_config(&publisher_config).await;
    let mut publisher = RateLimitedPublisher::new(sink, publisher_config.min_interval);

    // --- Shutdown on Ctrl-C ---
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for interrupt");
            return;
        }
        tracing::info!("Interrupt received, stopping capture");
        trigger.cancel();
    });

    let summary = run_capture_loop(&mut *source, &mut publisher, &capture_config, cancel).await;
    tracing::info!(
        frames = summary.frames,
        sent = summary.sent,
        failed = summary.failed,
        last_total = ?summary.last_total,
        "Worker finished"
    );

    Ok(())
}
