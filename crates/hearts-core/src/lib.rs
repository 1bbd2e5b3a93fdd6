//! Core types and trait definitions for the hearts service.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store and geocoder backends implement the traits defined here; the API
//! layer depends only on those traits.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod enrich;
pub mod error;
pub mod heart;
pub mod store;

pub use error::{Error, Result};
