//! Searchable records supplied by the storage collaborator.

use super::Key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display metadata attached to a candidate. Never inspected by scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateMetadata {
    pub access_count: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

/// A single searchable record: a secret's key plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "key")]
    pub label: Key,
    #[serde(flatten)]
    pub metadata: CandidateMetadata,
}

impl Candidate {
    pub fn new(label: Key) -> Self {
        Self {
            label,
            metadata: CandidateMetadata::default(),
        }
    }

    pub fn with_metadata(label: Key, metadata: CandidateMetadata) -> Self {
        Self { label, metadata }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Short human-readable suffix shown next to the label.
    pub fn summary(&self) -> String {
        match self.metadata.access_count {
            1 => "(accessed 1 time)".to_string(),
            n => format!("(accessed {n} times)"),
        }
    }
}

impl From<Key> for Candidate {
    fn from(label: Key) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(s: &str) -> Key {
        Key::try_from(s).unwrap()
    }

    #[test]
    fn test_summary_pluralizes() {
        let mut candidate = Candidate::new(make_key("github_token"));
        assert_eq!(candidate.summary(), "(accessed 0 times)");

        candidate.metadata.access_count = 1;
        assert_eq!(candidate.summary(), "(accessed 1 time)");

        candidate.metadata.access_count = 12;
        assert_eq!(candidate.summary(), "(accessed 12 times)");
    }

    #[test]
    fn test_deserialize_flattened_record() {
        let json = r#"{
            "key": "api_key_stripe",
            "access_count": 3,
            "created_at": "2024-05-01T10:00:00Z",
            "tags": ["payments"]
        }"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();

        assert_eq!(candidate.label(), "api_key_stripe");
        assert_eq!(candidate.metadata.access_count, 3);
        assert!(candidate.metadata.created_at.is_some());
        assert!(candidate.metadata.last_accessed.is_none());
        assert_eq!(candidate.metadata.tags, vec!["payments".to_string()]);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let candidate: Candidate = serde_json::from_str(r#"{"key": "db"}"#).unwrap();

        assert_eq!(candidate.label(), "db");
        assert_eq!(candidate.metadata, CandidateMetadata::default());
    }
}
