//! Handlers for `/hearts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/hearts` | All hearts, newest first |
//! | `POST` | `/hearts` | Body: [`NewHeartBody`]; returns 201 + stored heart |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use hearts_core::{
  enrich::{ReverseGeocoder, resolve_country},
  heart::{Heart, HeartKind, NewHeart, Place},
  store::HeartStore,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

pub const MISSING_FIELDS: &str = "Missing required fields: type, latitude, longitude";
pub const CREATE_FAILED: &str = "Failed to create heart";
pub const FETCH_FAILED: &str = "Failed to fetch hearts";

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /hearts`
pub async fn list<S, G>(
  State(state): State<AppState<S, G>>,
) -> Result<Json<Vec<Heart>>, ApiError>
where
  S: HeartStore,
  G: ReverseGeocoder,
{
  let hearts = state
    .store
    .list_newest_first()
    .await
    .map_err(ApiError::internal(FETCH_FAILED))?;
  Ok(Json(hearts))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /hearts`.
///
/// Every field is optional at the parsing stage so that missing fields get
/// the fixed validation message rather than a deserialiser error. Fields the
/// server owns (`timestamp`, `countryName`, ...) are ignored if sent.
#[derive(Debug, Default, Deserialize)]
pub struct NewHeartBody {
  #[serde(rename = "type")]
  pub kind:      Option<String>,
  pub latitude:  Option<f64>,
  pub longitude: Option<f64>,
  pub message:   Option<String>,
}

impl NewHeartBody {
  /// Check required fields and the heart type. Coordinates are not
  /// range-checked. The returned heart carries the default place.
  pub fn validate(self) -> Result<NewHeart, ApiError> {
    let (Some(kind), Some(latitude), Some(longitude)) =
      (self.kind, self.latitude, self.longitude)
    else {
      return Err(ApiError::BadRequest(MISSING_FIELDS.to_owned()));
    };

    let kind: HeartKind = kind
      .parse()
      .map_err(|_| ApiError::BadRequest(format!("Invalid heart type: {kind}")))?;

    Ok(NewHeart {
      kind,
      latitude,
      longitude,
      message: self.message.unwrap_or_default(),
      place: Place::default(),
    })
  }
}

/// `POST /hearts` — returns 201 + the stored [`Heart`].
///
/// The geocoder is consulted before the write; its failures never fail the
/// request.
pub async fn create<S, G>(
  State(state): State<AppState<S, G>>,
  body: Result<Json<NewHeartBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: HeartStore,
  G: ReverseGeocoder,
{
  let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let mut input = body.validate()?;

  let enrichment =
    resolve_country(state.geocoder.as_ref(), input.latitude, input.longitude).await;
  let resolved = enrichment.is_resolved();
  input.place = enrichment.into_place();

  let heart = state
    .store
    .insert(input)
    .await
    .map_err(ApiError::internal(CREATE_FAILED))?;

  tracing::info!(
    heart_id = %heart.id,
    kind = %heart.kind,
    country_code = %heart.place.country_code,
    resolved,
    "heart created"
  );
  Ok((StatusCode::CREATED, Json(heart)))
}
