//! Amazon Kinesis Data Streams sink.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kinesis::config::Region;
use aws_sdk_kinesis::error::DisplayErrorContext;
use aws_sdk_kinesis::primitives::Blob;

use super::{PublishError, StreamSink};
use crate::config::PublisherConfig;

/// Writes records to a single named Kinesis stream.
pub struct KinesisSink {
    client: aws_sdk_kinesis::Client,
    stream_name: String,
}

impl KinesisSink {
    pub fn new(client: aws_sdk_kinesis::Client, stream_name: impl Into<String>) -> Self {
        Self {
            client,
            stream_name: stream_name.into(),
        }
    }

    /// Build a client for the configured region (and endpoint, if any).
    ///
    /// Credentials come from the default AWS provider chain.
    pub async fn from_config(config: &PublisherConfig) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            stream = %config.stream_name,
            region = %config.region,
            endpoint = ?config.endpoint_url,
            "Kinesis client configured"
        );

        Self::new(aws_sdk_kinesis::Client::new(&sdk_config), config.stream_name.clone())
    }

    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
}

#[async_trait]
impl StreamSink for KinesisSink {
    async fn put_record(&self, partition_key: &str, data: Vec<u8>) -> Result<(), PublishError> {
        let output = self
            .client
            .put_record()
            .stream_name(&self.stream_name)
            .partition_key(partition_key)
            .data(Blob::new(data))
            .send()
            .await
            .map_err(|e| PublishError::Transport(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(
            stream = %self.stream_name,
            shard_id = %output.shard_id(),
            sequence_number = %output.sequence_number(),
            "Record stored"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
