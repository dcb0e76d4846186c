//! Stream event schema and record envelope.
//!
//! The producer writes one [`FingerCountEvent`] per publish as a JSON
//! object, e.g. `{"dedos": 3}`. Stream triggers hand those bytes to the
//! consumer base64-encoded inside each record, which is what
//! [`decode_record_data`] undoes.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Wire key holding the finger count.
pub const FINGER_COUNT_KEY: &str = "dedos";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Failure to encode or decode a stream record payload.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload is not a JSON object")]
    NotAnObject,
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// The event published for every gate-passing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerCountEvent {
    #[serde(rename = "dedos")]
    pub fingers: u32,
}

impl FingerCountEvent {
    pub fn new(fingers: u32) -> Self {
        Self { fingers }
    }

    /// Serialize to the JSON bytes written as the record payload.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        Ok(serde_json::to_vec(self)?)
    }
}

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// A decoded record payload as seen by the consumer.
///
/// The count is kept as a raw JSON value: a payload without the key is
/// still a valid payload and reports `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundPayload {
    pub fingers: Option<serde_json::Value>,
}

/// Base64-encode payload bytes the way a stream trigger presents them.
pub fn encode_record_data(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode one record's base64 data into its JSON payload.
pub fn decode_record_data(data: &str) -> Result<InboundPayload, EnvelopeError> {
    let raw = base64::engine::general_purpose::STANDARD.decode(data)?;
    let value: serde_json::Value = serde_json::from_slice(&raw)?;
    let object = value.as_object().ok_or(EnvelopeError::NotAnObject)?;

    Ok(InboundPayload {
        fingers: object.get(FINGER_COUNT_KEY).cloned(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
