//! Landmark frame sources.
//!
//! The hand detector runs outside this process. [`FrameSource`] is the
//! seam it is attached through; [`JsonLinesSource`] reads one JSON frame
//! per line from any async reader (a pipe from the detector, a recorded
//! file, ...).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fingercount_core::HandObservation;
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::config::SourceLocation;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to open landmark source {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read landmark frame: {0}")]
    Read(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Every hand detected in one captured frame.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub hands: Vec<HandObservation>,
}

// ---------------------------------------------------------------------------
// FrameSource
// ---------------------------------------------------------------------------

#[async_trait]
pub trait FrameSource: Send {
    /// Wait for the next frame.
    ///
    /// `Ok(None)` means the source is exhausted. An error means frames can
    /// no longer be acquired.
    async fn next_frame(&mut self) -> Result<Option<Frame>, SourceError>;
}

/// Open the configured source.
pub async fn open_source(location: &SourceLocation) -> Result<Box<dyn FrameSource>, SourceError> {
    match location {
        SourceLocation::Stdin => Ok(Box::new(JsonLinesSource::new(BufReader::new(
            tokio::io::stdin(),
        )))),
        SourceLocation::Path(path) => Ok(Box::new(JsonLinesSource::open(path).await?)),
    }
}

// ---------------------------------------------------------------------------
// JsonLinesSource
// ---------------------------------------------------------------------------

/// Newline-delimited JSON frames, e.g.
/// `{"hands":[{"handedness":"Right","landmarks":[{"x":0.5,"y":0.4}, ...]}]}`.
///
/// Blank lines are ignored and malformed lines are logged and skipped.
pub struct JsonLinesSource<R> {
    lines: Lines<R>,
    line_no: u64,
}

impl<R> JsonLinesSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl JsonLinesSource<BufReader<tokio::fs::File>> {
    pub async fn open(path: &Path) -> Result<Self, SourceError> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| SourceError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

#[async_trait]
impl<R> FrameSource for JsonLinesSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_frame(&mut self) -> Result<Option<Frame>, SourceError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Frame>(&line) {
                Ok(frame) => return Ok(Some(frame)),
                Err(e) => {
                    tracing::warn!(line = self.line_no, error = %e, "Skipping malformed landmark frame");
                }
            }
        }
        Ok(None)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use fingercount_core::Handedness;

    use super::*;

    fn source(text: &'static str) -> JsonLinesSource<&'static [u8]> {
        JsonLinesSource::new(text.as_bytes())
    }

    #[tokio::test]
    async fn reads_frames_in_order() {
        let mut src = source(concat!(
            r#"{"hands":[{"handedness":"Left","landmarks":[{"x":0.1,"y":0.2}]}]}"#,
            "\n",
            r#"{"hands":[]}"#,
            "\n",
        ));

        let first = src.next_frame().await.unwrap().unwrap();
        assert_eq!(first.hands.len(), 1);
        assert_eq!(first.hands[0].handedness, Handedness::Left);

        let second = src.next_frame().await.unwrap().unwrap();
        assert!(second.hands.is_empty());

        assert!(src.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_hands_key_is_empty_frame() {
        let mut src = source("{}\n");
        assert_eq!(src.next_frame().await.unwrap(), Some(Frame::default()));
    }

    #[tokio::test]
    async fn skips_blank_and_malformed_lines() {
        let mut src = source(concat!(
            "\n",
            "not json\n",
            r#"{"hands":[{"handedness":"Both","landmarks":[]}]}"#,
            "\n",
            r#"{"hands":[{"handedness":"Right","landmarks":[]}]}"#,
            "\n",
        ));

        let frame = src.next_frame().await.unwrap().unwrap();
        assert_eq!(frame.hands[0].handedness, Handedness::Right);
        assert_eq!(src.line_no, 4);
    }

    #[tokio::test]
    async fn empty_input_is_exhausted() {
        let mut src = source("");
        assert!(src.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_file_fails_to_open() {
        let result = JsonLinesSource::open(Path::new("/nonexistent/landmarks.jsonl")).await;
        assert_matches!(result.err(), Some(SourceError::Open { .. }));
    }
}
