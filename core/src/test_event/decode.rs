use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use super::model::TestEvent;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid event on line {line}")]
    InvalidJson {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read event stream")]
    Io(#[from] std::io::Error),
}

pub fn parse_event_line(line: &str) -> Result<TestEvent, serde_json::Error> {
    serde_json::from_str(line.trim())
}

/// Incremental decoder over the test command's stdout.
///
/// Events are yielded as soon as their line is complete. Blank lines are
/// skipped; anything else that is not a valid event ends the stream with a
/// [`DecodeError`].
pub struct TestEventStream<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R> TestEventStream<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    pub async fn next_event(&mut self) -> Result<Option<TestEvent>, DecodeError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return parse_event_line(&line)
                .map(Some)
                .map_err(|source| DecodeError::InvalidJson {
                    line: self.line_no,
                    source,
                });
        }
        Ok(None)
    }

    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}
