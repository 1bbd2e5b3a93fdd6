//! Error type for `hearts-geocode`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The geocoder answered with a non-success status. Not retried.
  #[error("geocoder returned HTTP {0}")]
  Status(reqwest::StatusCode),

  /// Connection, timeout, or body-read failure.
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("malformed geocoder response: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
