//! Search results types.

use lockr_core::types::Candidate;

/// Half-open char range `[start, end)` into the original label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
}

impl HighlightRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty highlight range {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Merges ascending matched char positions into contiguous ranges.
    pub(crate) fn merge_positions(positions: &[usize]) -> Vec<HighlightRange> {
        let mut ranges: Vec<HighlightRange> = Vec::new();
        for &pos in positions {
            match ranges.last_mut() {
                Some(last) if last.end == pos => last.end = pos + 1,
                _ => ranges.push(HighlightRange::new(pos, pos + 1)),
            }
        }
        ranges
    }
}

/// How a query relates to a label, in tier order (best first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchQuality {
    Exact,
    Prefix,
    Substring,
    Fuzzy,
    NoMatch,
}

impl MatchQuality {
    pub fn is_match(self) -> bool {
        self != MatchQuality::NoMatch
    }
}

/// Outcome of scoring one label against one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub highlights: Vec<HighlightRange>,
    pub quality: MatchQuality,
}

/// A ranked candidate. Built fresh by every search call.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub candidate: Candidate,
    pub score: f64,
    pub highlights: Vec<HighlightRange>,
}

impl MatchResult {
    /// Browse-mode entry: no query, so no score and nothing highlighted.
    pub(crate) fn unscored(candidate: &Candidate) -> Self {
        Self {
            candidate: candidate.clone(),
            score: 0.0,
            highlights: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        self.candidate.label()
    }
}
