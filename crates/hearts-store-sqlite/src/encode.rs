//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (millisecond
//! precision, `Z` suffix) so that lexical order matches chronological order.
//! UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, SubsecRound as _, Utc};
use hearts_core::heart::{Heart, HeartKind, Place};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

/// The current time at the precision the store keeps.
pub fn now() -> DateTime<Utc> { Utc::now().trunc_subsecs(3) }

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── HeartKind
// ────────────────────────────────────────────────────────────────

pub fn encode_kind(k: HeartKind) -> &'static str { k.as_str() }

pub fn decode_kind(s: &str) -> Result<HeartKind> { Ok(s.parse()?) }

// ─── Row ─────────────────────────────────────────────────────────────────────

/// Column order used by every `SELECT` against `hearts`.
pub const HEART_COLUMNS: &str = "heart_id, kind, latitude, longitude, message, \
                                 country_name, country_code, recorded_at";

/// A `hearts` row as read from SQLite, before decoding.
pub struct RawHeart {
  pub heart_id:     String,
  pub kind:         String,
  pub latitude:     f64,
  pub longitude:    f64,
  pub message:      String,
  pub country_name: String,
  pub country_code: String,
  pub recorded_at:  String,
}

impl RawHeart {
  /// Read a row selected with [`HEART_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      heart_id:     row.get(0)?,
      kind:         row.get(1)?,
      latitude:     row.get(2)?,
      longitude:    row.get(3)?,
      message:      row.get(4)?,
      country_name: row.get(5)?,
      country_code: row.get(6)?,
      recorded_at:  row.get(7)?,
    })
  }

  pub fn into_heart(self) -> Result<Heart> {
    Ok(Heart {
      id:        decode_uuid(&self.heart_id)?,
      kind:      decode_kind(&self.kind)?,
      latitude:  self.latitude,
      longitude: self.longitude,
      message:   self.message,
      place:     Place {
        country_name: self.country_name,
        country_code: self.country_code,
      },
      timestamp: decode_dt(&self.recorded_at)?,
    })
  }
}
