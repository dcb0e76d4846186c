//! Finger-count event publication.
//!
//! - [`RateLimitedPublisher`] — minimum-interval gate in front of a stream
//!   sink, owning the "last sent" timestamp.
//! - [`delivery`] — the [`StreamSink`] transport seam and its Kinesis
//!   implementation.
//! - [`PublisherConfig`] — stream/region/interval settings from the
//!   environment.

pub mod config;
pub mod delivery;
pub mod publisher;

pub use config::{ConfigError, PublisherConfig};
pub use delivery::kinesis::KinesisSink;
pub use delivery::{PublishError, StreamSink};
pub use publisher::{PublishOutcome, RateLimitedPublisher};
