//! JSON REST API for the hearts service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`hearts_core::store::HeartStore`] and
//! [`hearts_core::enrich::ReverseGeocoder`]. Static assets, CORS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", hearts_api::api_router(state))
//! ```

pub mod error;
pub mod hearts;

use std::sync::Arc;

use axum::{Router, routing::get};
use hearts_core::{enrich::ReverseGeocoder, store::HeartStore};

pub use error::ApiError;

/// Collaborators shared by all handlers, injected at construction.
#[derive(Clone)]
pub struct AppState<S, G> {
  pub store:    Arc<S>,
  pub geocoder: Arc<G>,
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, G>(state: AppState<S, G>) -> Router<()>
where
  S: HeartStore + Clone + 'static,
  G: ReverseGeocoder + Clone + 'static,
{
  Router::new()
    .route("/hearts", get(hearts::list::<S, G>).post(hearts::create::<S, G>))
    .with_state(state)
}
