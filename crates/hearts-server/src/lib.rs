//! HTTP server assembly for the hearts service.
//!
//! Loads [`ServerConfig`], and wraps the [`hearts_api`] router with request
//! tracing under `/api`.

use std::path::{Path, PathBuf};

use axum::Router;
use hearts_api::{AppState, api_router};
use hearts_core::{enrich::ReverseGeocoder, store::HeartStore};
use hearts_geocode::NominatimConfig;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Prefix for environment overrides, e.g. `HEARTS_PORT=8080`.
pub const ENV_PREFIX: &str = "HEARTS";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment. Every field has a default, so both sources are optional.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  pub geocoder:   NominatimConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "0.0.0.0".to_string(),
      port:       3000,
      store_path: PathBuf::from("hearts.db"),
      geocoder:   NominatimConfig::default(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Read configuration from `path` (if it exists) overlaid with `HEARTS_*`
/// environment variables. Nested keys use `__`, e.g.
/// `HEARTS_GEOCODER__BASE_URL`.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(
      config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true),
    )
    .build()?
    .try_deserialize()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: the JSON API under `/api`, with request
/// tracing.
pub fn app<S, G>(state: AppState<S, G>) -> Router
where
  S: HeartStore + Clone + 'static,
  G: ReverseGeocoder + Clone + 'static,
{
  Router::new()
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http())
}
