use std::time::Duration;

/// Default stream name when `KINESIS_STREAM_NAME` is unset.
pub const DEFAULT_STREAM_NAME: &str = "hand-gestures-stream";

/// Region used when neither region variable is set.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default minimum spacing between two sends, in seconds.
pub const DEFAULT_MIN_SEND_INTERVAL_SECS: f64 = 0.2;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// An environment variable is set but cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// PublisherConfig
// ---------------------------------------------------------------------------

/// Publisher configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct PublisherConfig {
    /// Target stream (default: `hand-gestures-stream`).
    pub stream_name: String,
    /// AWS region for the stream client.
    pub region: String,
    /// Endpoint override, e.g. a local stream emulator.
    pub endpoint_url: Option<String>,
    /// Minimum time between two successful sends.
    pub min_interval: Duration,
}

impl PublisherConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `KINESIS_STREAM_NAME`    | `hand-gestures-stream`  |
    /// | `AWS_DEFAULT_REGION`     | falls back to `AWS_REGION`, then `us-east-1` |
    /// | `KINESIS_ENDPOINT_URL`   | unset                   |
    /// | `MIN_SEND_INTERVAL_SEC`  | `0.2`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let stream_name = var("KINESIS_STREAM_NAME").unwrap_or_else(|| DEFAULT_STREAM_NAME.into());

        let region = var("AWS_DEFAULT_REGION")
            .or_else(|| var("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.into());

        let endpoint_url = var("KINESIS_ENDPOINT_URL");

        let min_interval = match var("MIN_SEND_INTERVAL_SEC") {
            Some(raw) => parse_interval("MIN_SEND_INTERVAL_SEC", &raw)?,
            None => Duration::from_secs_f64(DEFAULT_MIN_SEND_INTERVAL_SECS),
        };

        Ok(Self {
            stream_name,
            region,
            endpoint_url,
            min_interval,
        })
    }
}

/// Parse a non-negative, finite number of seconds.
fn parse_interval(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::Invalid {
        var,
        value: raw.to_string(),
        expected: "a non-negative number of seconds",
    };

    let secs: f64 = raw.trim().parse().map_err(|_| invalid())?;
    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
