//! Newline-delimited JSON input and output

use crate::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

/// A non-blank input line and its 1-based position among non-blank lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based index
    pub index: usize,
    /// Trimmed line content
    pub text: String,
}

/// Iterates the non-blank lines of a JSONL source
///
/// Lines are not parsed here, so one malformed line cannot stop the reader.
pub struct JsonlReader<R> {
    lines: Lines<R>,
    index: usize,
}

impl<R: BufRead> JsonlReader<R> {
    /// Wrap a buffered source
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            index: 0,
        }
    }
}

impl JsonlReader<BufReader<File>> {
    /// Open a JSONL file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            self.index += 1;
            return Some(Ok(Line {
                index: self.index,
                text: text.to_string(),
            }));
        }
    }
}

/// Writes one JSON document per line
pub struct JsonlWriter<W: Write> {
    inner: W,
}

impl<W: Write> JsonlWriter<W> {
    /// Wrap a sink
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Serialize `item` as a single line
    pub fn write<T: Serialize>(&mut self, item: &T) -> Result<()> {
        serde_json::to_writer(&mut self.inner, item)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl JsonlWriter<BufWriter<File>> {
    /// Create (or truncate) a JSONL file
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}
