//! Candidate providers.
//!
//! The search engine never talks to storage. Whoever owns the records hands
//! them over through a [`CandidateSource`], once per session.

use crate::types::{Candidate, Key};
use std::cell::RefCell;
use std::io::BufRead;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("candidate index not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to parse candidate index: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid key on line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supplies the full candidate set for a search session.
pub trait CandidateSource {
    fn load(&self) -> Result<Vec<Candidate>, SourceError>;
}

impl<F> CandidateSource for F
where
    F: Fn() -> Result<Vec<Candidate>, SourceError>,
{
    fn load(&self) -> Result<Vec<Candidate>, SourceError> {
        self()
    }
}

/// JSON array of candidate records exported by the vault.
#[derive(Debug, Clone)]
pub struct IndexFile {
    path: PathBuf,
}

impl IndexFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for IndexFile {
    fn load(&self) -> Result<Vec<Candidate>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.clone()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let candidates: Vec<Candidate> = serde_json::from_str(&content)?;

        debug!(
            path = %self.path.display(),
            count = candidates.len(),
            "loaded candidate index"
        );
        Ok(candidates)
    }
}

/// One label per line. Blank lines are skipped.
///
/// Reading consumes the underlying reader, so the source loads at most once;
/// later calls see an empty reader and return no candidates.
pub struct LineSource<R> {
    reader: RefCell<R>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }
}

impl<R: BufRead> CandidateSource for LineSource<R> {
    fn load(&self) -> Result<Vec<Candidate>, SourceError> {
        let mut reader = self.reader.borrow_mut();
        let mut candidates = Vec::new();
        let mut line = String::new();
        let mut line_no = 0;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            let key = Key::try_new(line.clone()).map_err(|e| SourceError::InvalidLine {
                line: line_no,
                reason: e.to_string(),
            })?;
            candidates.push(Candidate::new(key));
        }

        debug!(count = candidates.len(), "read candidates from lines");
        Ok(candidates)
    }
}
