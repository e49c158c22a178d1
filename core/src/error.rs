use crate::source::SourceError;
use crate::types::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("candidate source error: {0}")]
    Source(#[from] SourceError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
