//! Heart markers — the only entity the service stores.
//!
//! A heart is written once and never updated. The store assigns its id and
//! timestamp; the place fields come from reverse geocoding.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

/// Country name used before any enrichment has happened.
pub const UNKNOWN_COUNTRY_NAME: &str = "Unknown";
/// Country code used whenever no real ISO code is available.
pub const UNKNOWN_COUNTRY_CODE: &str = "XX";
/// Place name used when the geocoder could not be reached.
pub const UNKNOWN_LOCATION: &str = "an unknown location";
/// Place name used when the geocoder answered without a country.
pub const OPEN_SEA: &str = "the open sea";

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The fixed set of heart colours a marker may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeartKind {
  RedHeart,
  SilverHeart,
  YellowHeart,
}

impl HeartKind {
  pub const ALL: [HeartKind; 3] =
    [HeartKind::RedHeart, HeartKind::SilverHeart, HeartKind::YellowHeart];

  /// The wire name, identical to the serde representation.
  pub fn as_str(self) -> &'static str {
    match self {
      HeartKind::RedHeart => "redHeart",
      HeartKind::SilverHeart => "silverHeart",
      HeartKind::YellowHeart => "yellowHeart",
    }
  }
}

impl fmt::Display for HeartKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for HeartKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    HeartKind::ALL
      .into_iter()
      .find(|k| k.as_str() == s)
      .ok_or_else(|| Error::UnknownHeartKind(s.to_owned()))
  }
}

// ─── Place ───────────────────────────────────────────────────────────────────

/// The country a heart was dropped in, as far as we could tell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
  pub country_name: String,
  /// Two uppercase ASCII letters, or [`UNKNOWN_COUNTRY_CODE`].
  pub country_code: String,
}

impl Place {
  pub fn unknown_location() -> Self {
    Self::sentinel(UNKNOWN_LOCATION)
  }

  pub fn open_sea() -> Self { Self::sentinel(OPEN_SEA) }

  fn sentinel(name: &str) -> Self {
    Self {
      country_name: name.to_owned(),
      country_code: UNKNOWN_COUNTRY_CODE.to_owned(),
    }
  }
}

impl Default for Place {
  fn default() -> Self { Self::sentinel(UNKNOWN_COUNTRY_NAME) }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted heart marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heart {
  pub id:        Uuid,
  #[serde(rename = "type")]
  pub kind:      HeartKind,
  pub latitude:  f64,
  pub longitude: f64,
  pub message:   String,
  #[serde(flatten)]
  pub place:     Place,
  /// Server-assigned at write time.
  pub timestamp: DateTime<Utc>,
}

/// Input to [`HeartStore::insert`](crate::store::HeartStore::insert).
///
/// Carries everything except the id and timestamp, which the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHeart {
  pub kind:      HeartKind,
  pub latitude:  f64,
  pub longitude: f64,
  pub message:   String,
  pub place:     Place,
}

impl NewHeart {
  /// A heart with no message and the pre-enrichment default place.
  pub fn new(kind: HeartKind, latitude: f64, longitude: f64) -> Self {
    Self {
      kind,
      latitude,
      longitude,
      message: String::new(),
      place: Place::default(),
    }
  }
}
