use lockr_core::types::Candidate;
use lockr_search::{ScoringEngine, SessionOutcome};
use std::io::{self, Write};

/// Prints every key, or the ranked matches for `pattern`.
///
/// A missing or zero `limit` uses the engine's configured maximum.
pub fn list(
    out: &mut impl Write,
    engine: &ScoringEngine,
    candidates: &[Candidate],
    pattern: Option<&str>,
    limit: Option<usize>,
) -> io::Result<()> {
    if candidates.is_empty() {
        return writeln!(out, "No secrets stored in vault");
    }

    let Some(pattern) = pattern else {
        for candidate in candidates {
            let created = candidate
                .metadata
                .created_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            writeln!(
                out,
                "{:<30} (accessed {} times, created {})",
                candidate.label(),
                candidate.metadata.access_count,
                created
            )?;
        }
        return writeln!(out, "\nTotal: {} secrets", candidates.len());
    };

    let limit = limit
        .filter(|&n| n > 0)
        .unwrap_or_else(|| engine.options().max_results());
    let matches = engine.search_with_limit(pattern, candidates, Some(limit));

    if matches.is_empty() {
        return writeln!(out, "No matches found for pattern '{pattern}'");
    }

    writeln!(out, "Found {} matches for pattern '{pattern}':\n", matches.len())?;
    for (i, result) in matches.iter().enumerate() {
        writeln!(
            out,
            "{}. {} (score: {:.1}, accessed: {} times)",
            i + 1,
            result.label(),
            result.score,
            result.candidate.metadata.access_count
        )?;
    }
    Ok(())
}

/// One suggestion per line.
pub fn suggest(
    out: &mut impl Write,
    engine: &ScoringEngine,
    candidates: &[Candidate],
    prefix: &str,
    max: usize,
) -> io::Result<()> {
    for label in engine.query_suggestions(prefix, candidates, max) {
        writeln!(out, "{label}")?;
    }
    Ok(())
}

/// Writes the picked key to `out`, or a notice to `err`.
///
/// Returns whether a key was selected.
pub fn report_outcome(
    out: &mut impl Write,
    err: &mut impl Write,
    outcome: &SessionOutcome,
) -> io::Result<bool> {
    match outcome {
        SessionOutcome::Selected(candidate) => {
            writeln!(out, "{}", candidate.label())?;
            Ok(true)
        }
        SessionOutcome::Cancelled => {
            writeln!(err, "No selection made")?;
            Ok(false)
        }
    }
}
