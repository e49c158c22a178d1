//! Display data for a session. Styling belongs to the caller.

use crate::results::{HighlightRange, MatchResult};
use crate::session::InteractiveSession;

/// A run of label text that is either entirely highlighted or entirely plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSegment {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub segments: Vec<LabelSegment>,
    pub metadata: String,
    pub selected: bool,
}

impl ResultRow {
    fn new(result: &MatchResult, selected: bool) -> Self {
        Self {
            segments: highlight_segments(result.label(), &result.highlights),
            metadata: result.candidate.summary(),
            selected,
        }
    }

    /// The label with segment boundaries removed.
    pub fn label(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Results,
    /// A query is typed but nothing matches it.
    NoMatches,
    /// There is nothing to search.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub query: String,
    pub rows: Vec<ResultRow>,
    /// Matches beyond the display window ("N more").
    pub overflow: usize,
    pub status: ViewStatus,
}

impl From<&InteractiveSession> for SessionView {
    fn from(session: &InteractiveSession) -> Self {
        let rows: Vec<ResultRow> = session
            .visible_results()
            .iter()
            .enumerate()
            .map(|(i, result)| ResultRow::new(result, i == session.selected_index()))
            .collect();

        let status = if !rows.is_empty() {
            ViewStatus::Results
        } else if session.query().is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::NoMatches
        };

        Self {
            query: session.query().to_string(),
            rows,
            overflow: session.overflow(),
            status,
        }
    }
}

/// Splits `label` into plain and highlighted runs.
///
/// Ranges are char offsets. Anything past the end of the label, or overlapping
/// an earlier range, is clipped rather than rejected.
pub fn highlight_segments(label: &str, highlights: &[HighlightRange]) -> Vec<LabelSegment> {
    let boundaries: Vec<usize> = label
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(label.len()))
        .collect();
    let char_len = boundaries.len() - 1;

    let mut segments = Vec::new();
    let mut push = |from: usize, to: usize, highlighted: bool| {
        segments.push(LabelSegment {
            text: label[boundaries[from]..boundaries[to]].to_string(),
            highlighted,
        });
    };

    let mut cursor = 0;
    for range in highlights {
        let start = range.start.max(cursor).min(char_len);
        let end = range.end.min(char_len);
        if start >= end {
            continue;
        }
        if start > cursor {
            push(cursor, start, false);
        }
        push(start, end, true);
        cursor = end;
    }
    if cursor < char_len {
        push(cursor, char_len, false);
    }

    segments
}
