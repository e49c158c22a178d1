//! Shared types for the lockr secret search tools.
//!
//! Storage, encryption and keyring access live elsewhere; this crate only
//! describes the records they hand to search, plus configuration.

pub mod error;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use source::{CandidateSource, IndexFile, LineSource, SourceError};
pub use types::{AppConfig, Candidate, CandidateMetadata, Key};
