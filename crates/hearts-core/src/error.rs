//! Error types for `hearts-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown heart type: {0:?}")]
  UnknownHeartKind(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
