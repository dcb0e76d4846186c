//! Batch handler.
//!
//! Records are independent: each one is decoded on its own and a failure
//! is logged against that record only. Records without a payload (e.g.
//! control records) are skipped silently.

use fingercount_core::event::decode_record_data;
use fingercount_core::EnvelopeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status reported for every handled batch.
pub const STATUS_OK: &str = "ok";

// ---------------------------------------------------------------------------
// Event / response shapes
// ---------------------------------------------------------------------------

/// An inbound batch as delivered by the stream trigger.
///
/// Records stay as raw JSON so a malformed record cannot fail the whole
/// batch at deserialization time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamBatchEvent {
    #[serde(rename = "Records", default)]
    pub records: Option<Vec<Value>>,
}

impl StreamBatchEvent {
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            records: Some(records),
        }
    }

    pub fn records(&self) -> &[Value] {
        self.records.as_deref().unwrap_or_default()
    }
}

/// `{"status": "ok", "processed": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResponse {
    pub status: &'static str,
    pub processed: usize,
}

impl BatchResponse {
    pub fn ok(processed: usize) -> Self {
        Self {
            status: STATUS_OK,
            processed,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-record processing
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Record data is not a string")]
    DataNotString,

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

/// What happened to one record.
#[derive(Debug)]
pub enum RecordOutcome {
    /// Payload decoded. `fingers` is `None` when the count key was absent.
    Processed { fingers: Option<Value> },
    /// No payload to decode.
    Skipped,
    Failed(RecordError),
}

/// Locate the record's base64 payload under `kinesis.data`.
///
/// Missing nesting and empty values (`null`, `""`, `0`, `false`, `[]`,
/// `{}`) all mean "no payload".
fn record_data(record: &Value) -> Option<&Value> {
    record
        .get("kinesis")?
        .get("data")
        .filter(|data| !is_empty_value(data))
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Decode a single record.
pub fn process_record(record: &Value) -> RecordOutcome {
    let Some(data) = record_data(record) else {
        return RecordOutcome::Skipped;
    };

    let decoded = data
        .as_str()
        .ok_or(RecordError::DataNotString)
        .and_then(|data| decode_record_data(data).map_err(RecordError::from));

    match decoded {
        Ok(payload) => RecordOutcome::Processed {
            fingers: payload.fingers,
        },
        Err(e) => RecordOutcome::Failed(e),
    }
}

/// Process every record in `event` and count the ones that decoded.
///
/// Never fails: decode errors are logged per record and simply do not
/// count towards `processed`.
pub fn process_batch(event: &StreamBatchEvent) -> BatchResponse {
    let processed = event
        .records()
        .iter()
        .enumerate()
        .fold(0usize, |processed, (index, record)| {
            let sequence_number = record
                .pointer("/kinesis/sequenceNumber")
                .and_then(Value::as_str)
                .unwrap_or("-");

            match process_record(record) {
                RecordOutcome::Processed { fingers } => {
                    let fingers = fingers.map_or_else(|| "null".to_string(), |v| v.to_string());
                    tracing::info!(index, sequence_number, %fingers, "Finger count received");
                    processed + 1
                }
                RecordOutcome::Skipped => {
                    tracing::debug!(index, sequence_number, "Record without payload skipped");
                    processed
                }
                RecordOutcome::Failed(e) => {
                    tracing::error!(index, sequence_number, error = %e, "Failed to process record");
                    processed
                }
            }
        });

    BatchResponse::ok(processed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use fingercount_core::event::encode_record_data;
    use fingercount_core::FingerCountEvent;
    use serde_json::json;

    use super::*;

    fn record_with(data: Value) -> Value {
        json!({
            "eventSource": "aws:kinesis",
            "kinesis": {
                "partitionKey": "hand",
                "sequenceNumber": "49590338271490256608559692538361571095921575989136588898",
                "data": data,
            }
        })
    }

    fn count_record(fingers: u32) -> Value {
        let bytes = FingerCountEvent::new(fingers).to_json_bytes().unwrap();
        record_with(json!(encode_record_data(&bytes)))
    }

    // -- process_batch --------------------------------------------------------

    #[test]
    fn all_valid_records_are_processed() {
        let event = StreamBatchEvent::new(vec![count_record(1), count_record(5), count_record(10)]);
        assert_eq!(process_batch(&event), BatchResponse::ok(3));
    }

    #[test]
    fn invalid_base64_record_is_isolated() {
        let event = StreamBatchEvent::new(vec![
            count_record(2),
            record_with(json!("%%% not base64 %%%")),
            count_record(3),
        ]);
        assert_eq!(process_batch(&event).processed, 2);
    }

    #[test]
    fn record_without_payload_is_not_counted() {
        let event = StreamBatchEvent::new(vec![
            json!({"eventSource": "aws:kinesis"}),
            json!({"kinesis": {}}),
            record_with(Value::Null),
            record_with(json!("")),
            count_record(4),
        ]);
        assert_eq!(process_batch(&event).processed, 1);
    }

    #[test]
    fn empty_data_values_are_skipped_not_failed() {
        for data in [json!(0), json!(false), json!([]), json!({})] {
            assert_matches!(process_record(&record_with(data)), RecordOutcome::Skipped);
        }
    }

    #[test]
    fn mixed_batch_counts_only_decodable_records() {
        let event = StreamBatchEvent::new(vec![
            count_record(3),
            // "{}" without base64 padding.
            record_with(json!("e30")),
            // Valid base64 of the JSON literal `null`.
            record_with(json!(encode_record_data(b"null"))),
            json!({"kinesis": null}),
            record_with(json!(0)),
        ]);
        assert_eq!(process_batch(&event), BatchResponse::ok(1));
    }

    #[test]
    fn missing_count_key_still_counts() {
        let data = encode_record_data(br#"{"other": true}"#);
        let event = StreamBatchEvent::new(vec![record_with(json!(data))]);
        assert_eq!(process_batch(&event).processed, 1);
    }

    #[test]
    fn empty_and_missing_records_yield_zero() {
        assert_eq!(process_batch(&StreamBatchEvent::default()), BatchResponse::ok(0));
        assert_eq!(process_batch(&StreamBatchEvent::new(vec![])), BatchResponse::ok(0));
    }

    #[test]
    fn response_serializes_to_status_and_count() {
        let body = serde_json::to_value(BatchResponse::ok(2)).unwrap();
        assert_eq!(body, json!({"status": "ok", "processed": 2}));
    }

    #[test]
    fn event_deserializes_from_trigger_payload() {
        let event: StreamBatchEvent = serde_json::from_value(json!({
            "Records": [count_record(7), {"unexpected": "shape"}]
        }))
        .unwrap();
        assert_eq!(event.records().len(), 2);
        assert_eq!(process_batch(&event).processed, 1);
    }

    // -- process_record -------------------------------------------------------

    #[test]
    fn decoded_count_is_returned() {
        assert_matches!(
            process_record(&count_record(7)),
            RecordOutcome::Processed { fingers: Some(v) } if v == json!(7)
        );
    }

    #[test]
    fn absent_count_is_none() {
        let data = encode_record_data(b"{}");
        assert_matches!(
            process_record(&record_with(json!(data))),
            RecordOutcome::Processed { fingers: None }
        );
    }

    #[test]
    fn non_string_data_fails() {
        assert_matches!(
            process_record(&record_with(json!(42))),
            RecordOutcome::Failed(RecordError::DataNotString)
        );
    }

    #[test]
    fn non_json_payload_fails() {
        let data = encode_record_data(b"dedos=3");
        assert_matches!(
            process_record(&record_with(json!(data))),
            RecordOutcome::Failed(RecordError::Envelope(EnvelopeError::Json(_)))
        );
    }

    #[test]
    fn missing_nesting_is_skipped() {
        assert_matches!(process_record(&json!({"kinesis": "flat"})), RecordOutcome::Skipped);
        assert_matches!(process_record(&json!(null)), RecordOutcome::Skipped);
    }
}
