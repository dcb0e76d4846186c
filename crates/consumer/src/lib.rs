//! Stream consumer for finger-count events.
//!
//! Decodes a batch of stream records (each carrying a base64-encoded
//! `{"dedos": n}` payload), logs the finger count of every record that
//! decodes, and reports how many did.

pub mod handler;

pub use handler::{
    process_batch, process_record, BatchResponse, RecordError, RecordOutcome, StreamBatchEvent,
};
