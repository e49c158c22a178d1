use lockr_core::types::{Candidate, Key};
use lockr_search::{
    Direction, EXACT_SCORE, InteractiveSession, MatchQuality, ScoringEngine, highlight_segments,
};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_ÄäÖö0-9]{1,16}"
}

fn to_candidates(labels: &[String]) -> Vec<Candidate> {
    labels
        .iter()
        .map(|l| Candidate::new(Key::try_new(l.clone()).unwrap()))
        .collect()
}

proptest! {
    #[test]
    fn highlights_are_sorted_disjoint_and_in_bounds(
        labels in prop::collection::vec(label_strategy(), 0..20),
        query in "[a-zA-Zä_]{1,4}",
    ) {
        let engine = ScoringEngine::new();
        let candidates = to_candidates(&labels);

        for result in engine.search(&query, &candidates) {
            let len = result.label().chars().count();
            let mut prev_end = 0;
            for range in &result.highlights {
                prop_assert!(range.start < range.end);
                prop_assert!(range.end <= len);
                prop_assert!(range.start >= prev_end);
                prev_end = range.end;
            }
            prop_assert!(result.score > 0.0);
        }
    }

    #[test]
    fn empty_query_is_identity(labels in prop::collection::vec(label_strategy(), 0..30)) {
        let mut engine = ScoringEngine::new();
        engine.set_max_results(10);
        let candidates = to_candidates(&labels);

        let results = engine.search("", &candidates);

        prop_assert_eq!(results.len(), candidates.len().min(10));
        for (result, candidate) in results.iter().zip(&candidates) {
            prop_assert_eq!(&result.candidate, candidate);
            prop_assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn results_are_sorted_by_score(
        labels in prop::collection::vec(label_strategy(), 0..30),
        query in "[a-z_]{1,3}",
    ) {
        let engine = ScoringEngine::new();
        let results = engine.search(&query, &to_candidates(&labels));

        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn tier_scores_are_monotonic(label in label_strategy(), query in "[a-z]{1,4}") {
        let engine = ScoringEngine::new();
        let quality = engine.match_quality(&query, &label);
        let scored = engine.score_match(&query, &label);

        match quality {
            MatchQuality::Exact => prop_assert_eq!(scored.unwrap().score, EXACT_SCORE),
            MatchQuality::Prefix => prop_assert_eq!(scored.unwrap().score, 90.0),
            MatchQuality::Substring => {
                let score = scored.unwrap().score;
                prop_assert!((50.0..90.0).contains(&score));
            }
            MatchQuality::Fuzzy => {
                let score = scored.unwrap().score;
                prop_assert!((10.0..50.0).contains(&score));
            }
            MatchQuality::NoMatch => prop_assert!(scored.is_none()),
        }
    }

    #[test]
    fn segments_reassemble_label(
        label in label_strategy(),
        query in "[a-zä]{1,3}",
    ) {
        let engine = ScoringEngine::new();
        if let Some(scored) = engine.score_match(&query, &label) {
            let joined: String = highlight_segments(&label, &scored.highlights)
                .into_iter()
                .map(|s| s.text)
                .collect();
            prop_assert_eq!(joined, label);
        }
    }

    #[test]
    fn selection_stays_in_bounds(
        labels in prop::collection::vec(label_strategy(), 1..12),
        moves in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut session = InteractiveSession::new(to_candidates(&labels));
        let visible = session.visible_results().len();

        for next in moves {
            let direction = if next { Direction::Next } else { Direction::Previous };
            let before = session.selected_index();
            session.move_selection(direction);
            let expected = match direction {
                Direction::Next => (before + 1) % visible,
                Direction::Previous => (before + visible - 1) % visible,
            };
            prop_assert_eq!(session.selected_index(), expected);
            prop_assert!(session.current_selection().is_some());
        }
    }
}
