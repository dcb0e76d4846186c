//! Minimum-interval gate in front of a [`StreamSink`].
//!
//! [`RateLimitedPublisher`] bounds the outbound event rate of a
//! high-frequency capture loop. It owns the timestamp of the last
//! *successful* send; a failed send leaves it untouched so the next frame
//! may try again straight away.

use std::time::{Duration, Instant};

use fingercount_core::FingerCountEvent;

use crate::delivery::{PublishError, StreamSink};

/// Partition key every finger-count record is written under.
pub const DEFAULT_PARTITION_KEY: &str = "hand";

/// Result of one [`RateLimitedPublisher::maybe_publish`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The record was stored.
    Sent,
    /// The gate was closed; nothing was attempted.
    Skipped,
    /// The attempt was made and failed. Already logged.
    Failed,
}

/// Rate-limited publisher for finger-count events.
pub struct RateLimitedPublisher<S> {
    sink: S,
    partition_key: String,
    min_interval: Duration,
    last_sent: Option<Instant>,
}

impl<S: StreamSink> RateLimitedPublisher<S> {
    /// Create a publisher that has never sent anything.
    pub fn new(sink: S, min_interval: Duration) -> Self {
        Self {
            sink,
            partition_key: DEFAULT_PARTITION_KEY.to_string(),
            min_interval,
            last_sent: None,
        }
    }

    /// Override the partition key.
    pub fn with_partition_key(mut self, partition_key: impl Into<String>) -> Self {
        self.partition_key = partition_key.into();
        self
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// When the last successful send happened, if ever.
    pub fn last_sent(&self) -> Option<Instant> {
        self.last_sent
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// `true` when at least `min_interval` has elapsed since the last
    /// successful send, or nothing has been sent yet.
    pub fn gate_open(&self, now: Instant) -> bool {
        match self.last_sent {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.min_interval,
        }
    }

    /// Publish `fingers` if the gate is open at `now`.
    ///
    /// Never returns an error: transport failures are logged and reported
    /// as [`PublishOutcome::Failed`].
    pub async fn maybe_publish(&mut self, fingers: u32, now: Instant) -> PublishOutcome {
        if !self.gate_open(now) {
            return PublishOutcome::Skipped;
        }

        match self.send(fingers).await {
            Ok(()) => {
                self.last_sent = Some(now);
                tracing::debug!(fingers, partition_key = %self.partition_key, "Finger count published");
                PublishOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(fingers, error = %e, "Failed to publish finger count");
                PublishOutcome::Failed
            }
        }
    }

    async fn send(&self, fingers: u32) -> Result<(), PublishError> {
        let data = FingerCountEvent::new(fingers).to_json_bytes()?;
        self.sink.put_record(&self.partition_key, data).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
