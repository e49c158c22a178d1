pub use lockr_core::types::DEFAULT_MAX_RESULTS;
use lockr_core::types::SearchSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOptions {
    pub case_sensitive: bool,
    /// Always at least 1; see [`ScoreOptions::set_max_results`].
    pub(crate) max_results: usize,
    pub highlight_enabled: bool,
}

impl ScoreOptions {
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Zero falls back to [`DEFAULT_MAX_RESULTS`].
    pub fn set_max_results(&mut self, max: usize) {
        self.max_results = if max == 0 { DEFAULT_MAX_RESULTS } else { max };
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.set_max_results(max);
        self
    }
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_results: DEFAULT_MAX_RESULTS,
            highlight_enabled: true,
        }
    }
}

impl From<&SearchSettings> for ScoreOptions {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            case_sensitive: settings.case_sensitive,
            max_results: settings.max_results(),
            highlight_enabled: settings.highlight_matches,
        }
    }
}
