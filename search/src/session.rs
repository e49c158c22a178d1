//! Keystroke-driven search session.
//!
//! The session owns the query buffer, the candidate set and a window of the
//! best matches. Every query edit re-ranks the whole candidate set from
//! scratch; nothing is carried over between keystrokes.

use crate::config::ScoreOptions;
use crate::engine::ScoringEngine;
use crate::render::SessionView;
use crate::results::MatchResult;
pub use lockr_core::types::DEFAULT_DISPLAY_LIMIT;
use lockr_core::types::Candidate;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// One input event, already decoded from whatever the terminal produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Insert(char),
    Backspace,
    Move(Direction),
    Accept,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Active,
    Finalized(MatchResult),
    Cancelled,
}

/// What the caller gets back once the session ends.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Selected(Candidate),
    Cancelled,
}

pub struct InteractiveSession {
    engine: ScoringEngine,
    candidates: Vec<Candidate>,
    query: String,
    visible: Vec<MatchResult>,
    total_matches: usize,
    selected: usize,
    display_limit: usize,
    status: SessionStatus,
}

/// Create operations.
impl InteractiveSession {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self::with_options(candidates, ScoreOptions::default(), DEFAULT_DISPLAY_LIMIT)
    }

    /// A `display_limit` of zero falls back to [`DEFAULT_DISPLAY_LIMIT`].
    pub fn with_options(
        candidates: Vec<Candidate>,
        options: ScoreOptions,
        display_limit: usize,
    ) -> Self {
        let display_limit = if display_limit == 0 {
            DEFAULT_DISPLAY_LIMIT
        } else {
            display_limit
        };

        let mut session = Self {
            engine: ScoringEngine::with_options(options),
            candidates,
            query: String::new(),
            visible: Vec::new(),
            total_matches: 0,
            selected: 0,
            display_limit,
            status: SessionStatus::Active,
        };
        session.recompute();
        session
    }
}

/// Query editing.
impl InteractiveSession {
    pub fn append_char(&mut self, c: char) {
        if !self.is_active() {
            return;
        }
        self.query.push(c);
        self.recompute();
    }

    /// No-op on an empty query.
    pub fn remove_char(&mut self) {
        if !self.is_active() || self.query.pop().is_none() {
            return;
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        let window = self.display_limit.saturating_mul(2);
        let mut visible =
            self.engine
                .search_with_limit(&self.query, &self.candidates, Some(window));
        visible.truncate(self.display_limit);

        // Counted separately so the capped search stays independent of corpus size.
        self.total_matches = self
            .engine
            .search_with_limit(&self.query, &self.candidates, None)
            .len();
        self.visible = visible;
        self.selected = 0;

        debug!(
            query = %self.query,
            total = self.total_matches,
            shown = self.visible.len(),
            "recomputed results"
        );
    }
}

/// Navigation and termination.
impl InteractiveSession {
    /// Moves the cursor, wrapping around at both ends.
    pub fn move_selection(&mut self, direction: Direction) {
        if !self.is_active() || self.visible.is_empty() {
            return;
        }
        let len = self.visible.len();
        self.selected = match direction {
            Direction::Next => (self.selected + 1) % len,
            Direction::Previous => (self.selected + len - 1) % len,
        };
        trace!(selected = self.selected, "moved selection");
    }

    /// Ends the session with the selected result, or cancels if none.
    pub fn finalize(&mut self) {
        if !self.is_active() {
            return;
        }
        self.status = match self.current_selection() {
            Some(result) => SessionStatus::Finalized(result.clone()),
            None => SessionStatus::Cancelled,
        };
        debug!(selected = ?self.current_selection().map(MatchResult::label), "session finalized");
    }

    pub fn cancel(&mut self) {
        if !self.is_active() {
            return;
        }
        self.status = SessionStatus::Cancelled;
        debug!("session cancelled");
    }

    /// Applies one command. Returns the outcome once the session has ended.
    pub fn apply(&mut self, command: SessionCommand) -> Option<SessionOutcome> {
        trace!(?command, "applying session command");
        match command {
            SessionCommand::Insert(c) => self.append_char(c),
            SessionCommand::Backspace => self.remove_char(),
            SessionCommand::Move(direction) => self.move_selection(direction),
            SessionCommand::Accept => self.finalize(),
            SessionCommand::Cancel => self.cancel(),
        }
        self.outcome()
    }
}

/// Read operations.
impl InteractiveSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible_results(&self) -> &[MatchResult] {
        &self.visible
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Matches for the current query before the display window was applied.
    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    /// How many matches did not fit in the display window.
    pub fn overflow(&self) -> usize {
        self.total_matches.saturating_sub(self.visible.len())
    }

    pub fn current_selection(&self) -> Option<&MatchResult> {
        self.visible.get(self.selected)
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, SessionStatus::Active)
    }

    /// `None` while the session is still active.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        match &self.status {
            SessionStatus::Active => None,
            SessionStatus::Finalized(result) => {
                Some(SessionOutcome::Selected(result.candidate.clone()))
            }
            SessionStatus::Cancelled => Some(SessionOutcome::Cancelled),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView::from(self)
    }
}
