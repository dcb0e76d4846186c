//! Per-frame capture → count → publish cycle.
//!
//! Frames are handled strictly one after another: the next frame is not
//! requested until the current one has been published (or skipped), so a
//! slow send delays capture instead of piling up work.

use std::time::Instant;

use fingercount_core::aggregate;
use fingercount_events::{PublishOutcome, RateLimitedPublisher, StreamSink};
use tokio_util::sync::CancellationToken;

use crate::config::CaptureConfig;
use crate::source::FrameSource;

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSummary {
    pub frames: u64,
    pub sent: u64,
    pub skipped: u64,
    pub failed: u64,
    /// Finger total of the last processed frame.
    pub last_total: Option<u32>,
}

impl CaptureSummary {
    fn record(&mut self, total: u32, outcome: PublishOutcome) {
        self.frames += 1;
        self.last_total = Some(total);
        match outcome {
            PublishOutcome::Sent => self.sent += 1,
            PublishOutcome::Skipped => self.skipped += 1,
            PublishOutcome::Failed => self.failed += 1,
        }
    }
}

/// Run the capture loop until `cancel` fires or the source stops.
///
/// A source error ends the loop like exhaustion does; it is logged, not
/// returned. Publish failures never end the loop.
pub async fn run_capture_loop<F, S>(
    source: &mut F,
    publisher: &mut RateLimitedPublisher<S>,
    config: &CaptureConfig,
    cancel: CancellationToken,
) -> CaptureSummary
where
    F: FrameSource + ?Sized,
    S: StreamSink,
{
    let mut summary = CaptureSummary::default();
    tracing::info!(
        mirrored = config.mirrored,
        min_interval_ms = publisher.min_interval().as_millis() as u64,
        "Capture loop started"
    );

    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("Capture loop cancelled");
                break;
            }
            next = source.next_frame() => next,
        };

        let frame = match next {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                tracing::info!("Landmark source exhausted");
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "Frame acquisition failed, stopping capture");
                break;
            }
        };

        let total = aggregate(&frame.hands, config.mirrored);
        let outcome = publisher.maybe_publish(total, Instant::now()).await;
        tracing::trace!(hands = frame.hands.len(), total, ?outcome, "Frame processed");
        summary.record(total, outcome);
    }

    tracing::info!(
        frames = summary.frames,
        sent = summary.sent,
        skipped = summary.skipped,
        failed = summary.failed,
        "Capture loop stopped"
    );
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
