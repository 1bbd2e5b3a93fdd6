//! The `HeartStore` trait.
//!
//! Implemented by storage backends (e.g. `hearts-store-sqlite`). The API layer
//! receives a store at construction time and never reaches for a global
//! connection, so tests can substitute their own.

use std::future::Future;

use crate::heart::{Heart, NewHeart};

/// Abstraction over the document store holding heart markers.
///
/// Writes are append-only: there is no update or delete.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait HeartStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new heart and return the stored record.
  /// The id and `timestamp` are assigned by the store.
  fn insert(
    &self,
    input: NewHeart,
  ) -> impl Future<Output = Result<Heart, Self::Error>> + Send + '_;

  /// Return every stored heart ordered by `timestamp`, newest first.
  /// Hearts sharing a timestamp are returned most recently inserted first.
  fn list_newest_first(
    &self,
  ) -> impl Future<Output = Result<Vec<Heart>, Self::Error>> + Send + '_;
}
