pub(crate) mod config;
pub use config::{
    AppConfig, ConfigError, DEFAULT_DISPLAY_LIMIT, DEFAULT_MAX_RESULTS, InterfaceSettings,
    SearchSettings,
};

pub(crate) mod key;
pub use key::{Key, KeyError, MAX_KEY_LENGTH};

pub(crate) mod candidate;
pub use candidate::{Candidate, CandidateMetadata};
