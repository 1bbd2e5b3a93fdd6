//! [`NominatimClient`] — reqwest-backed [`ReverseGeocoder`].

use std::time::Duration;

use hearts_core::enrich::{Address, ReverseGeocoder};
use reqwest::{Client, header};
use serde::Deserialize;

use crate::{Error, Result, dto::ReverseResponse};

/// Nominatim zoom level for country-level resolution.
const COUNTRY_ZOOM: &str = "3";
const LANGUAGE: &str = "en";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Connection settings for the reverse geocoder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NominatimConfig {
  /// Full URL of the `/reverse` endpoint.
  pub base_url:     String,
  /// Nominatim's usage policy requires an identifying user agent.
  pub user_agent:   String,
  pub timeout_secs: u64,
}

impl Default for NominatimConfig {
  fn default() -> Self {
    Self {
      base_url:     "https://nominatim.openstreetmap.org/reverse".to_owned(),
      user_agent:   concat!("hearts/", env!("CARGO_PKG_VERSION")).to_owned(),
      timeout_secs: 10,
    }
  }
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Async client for a Nominatim `/reverse` endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct NominatimClient {
  client:   Client,
  base_url: String,
}

impl NominatimClient {
  pub fn new(config: &NominatimConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(config.user_agent.as_str())
      .build()?;
    Ok(Self { client, base_url: config.base_url.clone() })
  }

  /// `GET {base_url}?format=json&lat=..&lon=..&zoom=3&accept-language=en`
  pub async fn lookup(&self, latitude: f64, longitude: f64) -> Result<Option<Address>> {
    let resp = self
      .client
      .get(&self.base_url)
      .header(header::ACCEPT, "application/json")
      .query(&[
        ("format", "json".to_owned()),
        ("lat", latitude.to_string()),
        ("lon", longitude.to_string()),
        ("zoom", COUNTRY_ZOOM.to_owned()),
        ("accept-language", LANGUAGE.to_owned()),
      ])
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      tracing::error!(%status, latitude, longitude, "reverse geocoding request rejected");
      return Err(Error::Status(status));
    }

    let body = resp.bytes().await?;
    let decoded: ReverseResponse = serde_json::from_slice(&body)?;
    Ok(decoded.into_address())
  }
}

impl ReverseGeocoder for NominatimClient {
  type Error = Error;

  async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<Address>> {
    self.lookup(latitude, longitude).await
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    routing::get,
  };
  use hearts_core::{
    enrich::{Enrichment, resolve_country},
    heart::Place,
  };
  use serde_json::{Value, json};
  use tokio::net::TcpListener;

  use super::*;

  /// Serve `router` on an ephemeral port and return its `/reverse` URL.
  async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}/reverse")
  }

  fn client(base_url: String) -> NominatimClient {
    NominatimClient::new(&NominatimConfig {
      base_url,
      timeout_secs: 1,
      ..NominatimConfig::default()
    })
    .unwrap()
  }

  fn answering(body: Value) -> Router {
    Router::new().route("/reverse", get(move || async move { Json(body) }))
  }

  #[tokio::test]
  async fn france_resolves() {
    let url = spawn(answering(json!({
      "place_id": 1,
      "display_name": "France",
      "address": { "country": "France", "country_code": "fr" }
    })))
    .await;

    let address = client(url).lookup(46.2, 2.2).await.unwrap();
    assert_eq!(
      address,
      Some(Address {
        country:      Some("France".into()),
        country_code: Some("fr".into()),
      })
    );
  }

  #[tokio::test]
  async fn request_asks_for_country_level_english() {
    let router = Router::new().route(
      "/reverse",
      get(|Query(q): Query<HashMap<String, String>>| async move {
        let ok = q.get("format").map(String::as_str) == Some("json")
          && q.get("zoom").map(String::as_str) == Some("3")
          && q.get("accept-language").map(String::as_str) == Some("en")
          && q.get("lat").map(String::as_str) == Some("51.5")
          && q.get("lon").map(String::as_str) == Some("-0.12");
        if ok {
          Ok(Json(json!({ "address": { "country": "United Kingdom", "country_code": "gb" } })))
        } else {
          Err(StatusCode::BAD_REQUEST)
        }
      }),
    );
    let url = spawn(router).await;

    let address = client(url).lookup(51.5, -0.12).await.unwrap().unwrap();
    assert_eq!(address.country.as_deref(), Some("United Kingdom"));
  }

  #[tokio::test]
  async fn unable_to_geocode_is_no_address() {
    let url = spawn(answering(json!({ "error": "Unable to geocode" }))).await;
    assert_eq!(client(url).lookup(0.0, -30.0).await.unwrap(), None);
  }

  #[tokio::test]
  async fn error_status_is_terminal() {
    let router = Router::new()
      .route("/reverse", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let url = spawn(router).await;

    let err = client(url).lookup(1.0, 1.0).await.unwrap_err();
    assert!(
      matches!(err, Error::Status(s) if s == StatusCode::SERVICE_UNAVAILABLE),
      "unexpected error: {err}"
    );
  }

  #[tokio::test]
  async fn non_json_body_is_decode_error() {
    let router = Router::new().route("/reverse", get(|| async { "<html>busy</html>" }));
    let url = spawn(router).await;

    let err = client(url).lookup(1.0, 1.0).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "unexpected error: {err}");
  }

  #[tokio::test]
  async fn refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}/reverse"))
      .lookup(1.0, 1.0)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "unexpected error: {err}");
  }

  #[tokio::test]
  async fn slow_geocoder_times_out() {
    let router = Router::new().route(
      "/reverse",
      get(|| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Json(json!({ "address": { "country": "Late", "country_code": "lt" } }))
      }),
    );
    let url = spawn(router).await;

    let err = client(url).lookup(1.0, 1.0).await.unwrap_err();
    assert!(matches!(err, Error::Transport(ref e) if e.is_timeout()), "unexpected error: {err}");
  }

  // ── Through the enrichment policy ───────────────────────────────────────────

  #[tokio::test]
  async fn failures_and_empty_answers_map_to_distinct_sentinels() {
    let down = spawn(
      Router::new().route("/reverse", get(|| async { StatusCode::INTERNAL_SERVER_ERROR })),
    )
    .await;
    let sea = spawn(answering(json!({ "error": "Unable to geocode" }))).await;
    let countryless = spawn(answering(json!({ "address": { "ocean": "Pacific" } }))).await;

    let e = resolve_country(&client(down), 0.0, 0.0).await;
    assert_eq!(e, Enrichment::Fallback(Place::unknown_location()));

    let e = resolve_country(&client(sea), 0.0, 0.0).await;
    assert_eq!(e, Enrichment::Fallback(Place::open_sea()));

    let e = resolve_country(&client(countryless), 0.0, 0.0).await;
    assert_eq!(e, Enrichment::Fallback(Place::open_sea()));
  }

  #[tokio::test]
  async fn resolved_code_is_uppercased() {
    let url = spawn(answering(json!({
      "address": { "country": "France", "country_code": "fr" }
    })))
    .await;

    let e = resolve_country(&client(url), 46.2, 2.2).await;
    assert_eq!(
      e,
      Enrichment::Resolved(Place {
        country_name: "France".into(),
        country_code: "FR".into(),
      })
    );
  }
}
