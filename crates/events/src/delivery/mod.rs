//! Outbound transport for finger-count events.
//!
//! [`StreamSink`] is the seam between the publisher gate and the stream
//! service. Each call is a single, non-retried attempt.

use async_trait::async_trait;
use fingercount_core::EnvelopeError;

pub mod kinesis;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for a failed publish attempt.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The event could not be serialized.
    #[error("Failed to encode event: {0}")]
    Encode(#[from] EnvelopeError),

    /// The stream service rejected the record or could not be reached.
    #[error("Stream put_record failed: {0}")]
    Transport(String),
}

// ---------------------------------------------------------------------------
// StreamSink
// ---------------------------------------------------------------------------

/// Writes one record to a partitioned event stream.
#[async_trait]
pub trait StreamSink: Send + Sync {
    /// Store `data` under `partition_key`.
    async fn put_record(&self, partition_key: &str, data: Vec<u8>) -> Result<(), PublishError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = PublishError::Transport("ResourceNotFoundException".into());
        assert_eq!(
            err.to_string(),
            "Stream put_record failed: ResourceNotFoundException"
        );
    }

    #[test]
    fn encode_error_wraps_envelope_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PublishError::from(EnvelopeError::Json(json_err));
        assert!(err.to_string().starts_with("Failed to encode event"));
    }
}
