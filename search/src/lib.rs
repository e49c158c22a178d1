//! Lockr fuzzy key search.
//!
//! Ranks secret keys against a partial query and drives the interactive
//! picker used to select one.
//!
//! # Scoring tiers
//!
//! - Exact match (after case folding): 100
//! - Prefix match: 90
//! - Substring at char offset `i`: `max(50, 80 - 2i)`
//! - Ordered subsequence: consecutive-run bonus scaled by how much of the
//!   label the query covers, mapped monotonically into `[10, 50)`
//!
//! Labels matching none of these are dropped, never returned with score 0.
//! Score 0 only appears in browse mode, when the query is empty.
//!
//! # Sessions
//!
//! [`InteractiveSession`] re-ranks the full candidate set on every keystroke
//! and exposes a small window of results plus a wrapping cursor.

mod config;
mod engine;
mod query;
mod render;
mod results;
mod session;

pub use config::{DEFAULT_MAX_RESULTS, ScoreOptions};
pub use engine::{
    EXACT_SCORE, FUZZY_CEILING, FUZZY_FLOOR, PREFIX_SCORE, SUBSTRING_FLOOR, ScoringEngine,
};
pub use render::{LabelSegment, ResultRow, SessionView, ViewStatus, highlight_segments};
pub use results::{HighlightRange, MatchQuality, MatchResult, Scored};
pub use session::{
    DEFAULT_DISPLAY_LIMIT, Direction, InteractiveSession, SessionCommand, SessionOutcome,
    SessionStatus,
};
