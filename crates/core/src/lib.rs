//! Finger-count domain logic.
//!
//! Pure, I/O-free building blocks shared by the producer and the consumer:
//!
//! - [`landmarks`] — the 21-point hand landmark model.
//! - [`handedness`] — left/right labels and the mirrored-image correction.
//! - [`classifier`] — raised-finger count for a single hand.
//! - [`aggregate`] — per-frame total across every detected hand.
//! - [`event`] — the `{"dedos": n}` stream event and its record envelope.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod event;
pub mod handedness;
pub mod landmarks;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::aggregate;
pub use classifier::classify;
pub use error::CoreError;
pub use event::{
    decode_record_data, encode_record_data, EnvelopeError, FingerCountEvent, InboundPayload,
};
pub use handedness::{correct, Handedness};
pub use landmarks::{HandObservation, Landmark};
