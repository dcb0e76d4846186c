use std::path::PathBuf;

use fingercount_events::ConfigError;

/// Where landmark frames are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Stdin,
    Path(PathBuf),
}

/// Capture-side configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Frames were flipped horizontally before detection (default: `true`).
    pub mirrored: bool,
    /// Landmark feed (default: stdin).
    pub source: SourceLocation,
}

impl CaptureConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default        |
    /// |-------------------|----------------|
    /// | `IMAGE_FLIPPED`   | `true`         |
    /// | `LANDMARK_SOURCE` | `-` (stdin)    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mirrored = match var("IMAGE_FLIPPED") {
            Some(raw) => parse_bool("IMAGE_FLIPPED", &raw)?,
            None => true,
        };

        let source = match var("LANDMARK_SOURCE") {
            Some(path) if path.trim() != "-" => SourceLocation::Path(PathBuf::from(path)),
            _ => SourceLocation::Stdin,
        };

        Ok(Self { mirrored, source })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            expected: "a boolean (true/false)",
        }),
    }
}
