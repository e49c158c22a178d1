//! Tiered scoring and ranking of candidate labels.

use crate::config::ScoreOptions;
use crate::query::Normalized;
use crate::results::{HighlightRange, MatchQuality, MatchResult, Scored};
use lockr_core::types::Candidate;
use std::collections::HashSet;
use tracing::trace;

pub const EXACT_SCORE: f64 = 100.0;
pub const PREFIX_SCORE: f64 = 90.0;
const SUBSTRING_BASE: f64 = 80.0;
const SUBSTRING_OFFSET_PENALTY: f64 = 2.0;
pub const SUBSTRING_FLOOR: f64 = 50.0;
pub const FUZZY_FLOOR: f64 = 10.0;
/// Exclusive upper bound of the fuzzy band. Fuzzy hits stay strictly below the
/// weakest substring hit.
pub const FUZZY_CEILING: f64 = SUBSTRING_FLOOR;

const FUZZY_BASE_BONUS: f64 = 2.0;
const FUZZY_RUN_BONUS: f64 = 0.5;
const FUZZY_SCALE: f64 = 20.0;
/// Raw score above the floor that lands halfway up the fuzzy band.
const FUZZY_HALF_SPAN: f64 = 100.0;

/// Ranks candidates against a query.
///
/// Stateless apart from its [`ScoreOptions`]; changing options needs `&mut self`,
/// so it cannot interleave with a search borrowing the same engine.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    options: ScoreOptions,
}

/// Create operations.
impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScoreOptions) -> Self {
        Self { options }
    }
}

/// Configuration.
impl ScoringEngine {
    pub fn options(&self) -> &ScoreOptions {
        &self.options
    }

    pub fn set_case_sensitive(&mut self, sensitive: bool) {
        self.options.case_sensitive = sensitive;
    }

    pub fn set_max_results(&mut self, max: usize) {
        self.options.set_max_results(max);
    }

    pub fn set_highlight_matches(&mut self, highlight: bool) {
        self.options.highlight_enabled = highlight;
    }
}

/// Search operations.
impl ScoringEngine {
    /// Ranks `candidates` against `query`, capped at the configured maximum.
    ///
    /// An empty query is browse mode: every candidate, input order, score 0.
    pub fn search(&self, query: &str, candidates: &[Candidate]) -> Vec<MatchResult> {
        self.search_with_limit(query, candidates, Some(self.options.max_results()))
    }

    /// Like [`search`](Self::search) with an explicit cap. `None` means unlimited.
    pub fn search_with_limit(
        &self,
        query: &str,
        candidates: &[Candidate],
        limit: Option<usize>,
    ) -> Vec<MatchResult> {
        let limit = limit.unwrap_or(usize::MAX);

        if query.is_empty() {
            return candidates
                .iter()
                .take(limit)
                .map(MatchResult::unscored)
                .collect();
        }

        let query_norm = self.normalize(query);
        let mut ranked: Vec<(MatchResult, Normalized, bool)> = candidates
            .iter()
            .filter_map(|candidate| {
                let label_norm = self.normalize(candidate.label());
                let scored = score_normalized(&query_norm, &label_norm)?;
                if scored.score <= 0.0 {
                    return None;
                }
                let starts_with = label_norm.starts_with(&query_norm);
                let highlights = if self.options.highlight_enabled {
                    scored.highlights
                } else {
                    Vec::new()
                };
                let result = MatchResult {
                    candidate: candidate.clone(),
                    score: scored.score,
                    highlights,
                };
                Some((result, label_norm, starts_with))
            })
            .collect();

        ranked.sort_by(|(a, a_label, a_prefix), (b, b_label, b_prefix)| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b_prefix.cmp(a_prefix))
                .then_with(|| a_label.cmp(b_label))
        });
        ranked.truncate(limit);

        trace!(query, matched = ranked.len(), "ranked candidates");
        ranked.into_iter().map(|(result, _, _)| result).collect()
    }

    /// Scores one label. `None` means the label does not match at all.
    ///
    /// An empty query matches everything with score 0 and no highlights.
    pub fn score_match(&self, query: &str, label: &str) -> Option<Scored> {
        score_normalized(&self.normalize(query), &self.normalize(label))
    }

    /// Classifies a label using the same tier order as scoring.
    pub fn match_quality(&self, query: &str, label: &str) -> MatchQuality {
        self.score_match(query, label)
            .map(|scored| scored.quality)
            .unwrap_or(MatchQuality::NoMatch)
    }

    /// Up to `max` distinct labels starting with `prefix`, in candidate order.
    pub fn query_suggestions(
        &self,
        prefix: &str,
        candidates: &[Candidate],
        max: usize,
    ) -> Vec<String> {
        if prefix.is_empty() || max == 0 {
            return Vec::new();
        }

        let prefix_norm = self.normalize(prefix);
        let mut seen = HashSet::new();
        candidates
            .iter()
            .map(Candidate::label)
            .filter(|label| self.normalize(label).starts_with(&prefix_norm))
            .filter(|label| seen.insert(*label))
            .take(max)
            .map(str::to_string)
            .collect()
    }

    /// Keeps results scoring at least `min_score`, at most `max_results` of them.
    ///
    /// Preserves the incoming order.
    pub fn filter_top_matches(
        results: &[MatchResult],
        max_results: usize,
        min_score: f64,
    ) -> Vec<MatchResult> {
        results
            .iter()
            .filter(|result| result.score >= min_score)
            .take(max_results)
            .cloned()
            .collect()
    }

    fn normalize(&self, s: &str) -> Normalized {
        Normalized::new(s, self.options.case_sensitive)
    }
}

fn score_normalized(query: &Normalized, label: &Normalized) -> Option<Scored> {
    if query.is_empty() {
        let quality = if label.is_empty() {
            MatchQuality::Exact
        } else {
            MatchQuality::Prefix
        };
        return Some(Scored {
            score: 0.0,
            highlights: Vec::new(),
            quality,
        });
    }

    if query == label {
        return Some(Scored {
            score: EXACT_SCORE,
            highlights: vec![HighlightRange::new(0, label.len())],
            quality: MatchQuality::Exact,
        });
    }

    if label.starts_with(query) {
        return Some(Scored {
            score: PREFIX_SCORE,
            highlights: vec![HighlightRange::new(0, query.len())],
            quality: MatchQuality::Prefix,
        });
    }

    if let Some(idx) = label.find(query) {
        let score = (SUBSTRING_BASE - SUBSTRING_OFFSET_PENALTY * idx as f64).max(SUBSTRING_FLOOR);
        return Some(Scored {
            score,
            highlights: vec![HighlightRange::new(idx, idx + query.len())],
            quality: MatchQuality::Substring,
        });
    }

    let (score, positions) = fuzzy_score(query.chars(), label.chars())?;
    Some(Scored {
        score,
        highlights: HighlightRange::merge_positions(&positions),
        quality: MatchQuality::Fuzzy,
    })
}

/// Ordered-subsequence match. Returns the score and matched char positions.
fn fuzzy_score(query: &[char], label: &[char]) -> Option<(f64, Vec<usize>)> {
    if query.is_empty() || label.is_empty() {
        return None;
    }

    let mut positions = Vec::with_capacity(query.len());
    let mut run = 0usize;
    let mut total_bonus = 0.0;

    for (pos, &c) in label.iter().enumerate() {
        let Some(&wanted) = query.get(positions.len()) else {
            break;
        };
        if c == wanted {
            positions.push(pos);
            run += 1;
            total_bonus += FUZZY_BASE_BONUS + run as f64 * FUZZY_RUN_BONUS;
        } else {
            run = 0;
        }
    }

    if positions.len() < query.len() {
        return None;
    }

    let match_ratio = positions.len() as f64 / query.len() as f64;
    let length_ratio = query.len() as f64 / label.len() as f64;
    let raw = total_bonus * match_ratio * length_ratio * FUZZY_SCALE;

    Some((compress_fuzzy(raw), positions))
}

/// Maps a raw fuzzy score into `[FUZZY_FLOOR, FUZZY_CEILING)`.
///
/// Strictly increasing above the floor, so stronger subsequence hits keep
/// ranking above weaker ones.
fn compress_fuzzy(raw: f64) -> f64 {
    let excess = (raw - FUZZY_FLOOR).max(0.0);
    FUZZY_FLOOR + (FUZZY_CEILING - FUZZY_FLOOR) * excess / (excess + FUZZY_HALF_SPAN)
}
