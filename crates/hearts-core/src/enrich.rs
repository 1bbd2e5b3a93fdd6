//! Reverse-geocoding enrichment.
//!
//! Enrichment is best-effort: [`resolve_country`] always yields a [`Place`],
//! either the one the geocoder resolved or a sentinel describing why it could
//! not. Two sentinels exist and the distinction is observable:
//!
//! | Geocoder outcome | Result |
//! |------------------|--------|
//! | call failed (transport, timeout, bad status, bad body) | `"an unknown location"` / `XX` |
//! | answered, no address | `"the open sea"` / `XX` |
//! | answered, address without a country | `"the open sea"` / `XX` |
//! | answered with a country | country name / uppercased code |

use std::future::Future;

use crate::heart::{Place, UNKNOWN_COUNTRY_CODE};

// ─── Geocoder seam ───────────────────────────────────────────────────────────

/// The country-level part of a reverse-geocoded address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
  pub country:      Option<String>,
  /// ISO 3166-1 alpha-2 code as reported, in any case.
  pub country_code: Option<String>,
}

/// A service that maps coordinates to an address.
pub trait ReverseGeocoder: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up the address at the given coordinates.
  ///
  /// `Ok(None)` means the service answered but found nothing there (e.g. open
  /// water). Any failure to obtain an answer is an `Err`.
  fn reverse(
    &self,
    latitude: f64,
    longitude: f64,
  ) -> impl Future<Output = Result<Option<Address>, Self::Error>> + Send + '_;
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// The result of enriching a pair of coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment {
  /// The geocoder named a country.
  Resolved(Place),
  /// A sentinel place substituted for missing data.
  Fallback(Place),
}

impl Enrichment {
  /// Map a geocoder answer to a place.
  pub fn from_address(address: Option<Address>) -> Self {
    let Some(address) = address else {
      return Self::Fallback(Place::open_sea());
    };
    match address.country.filter(|name| !name.is_empty()) {
      Some(country_name) => Self::Resolved(Place {
        country_name,
        country_code: normalize_country_code(address.country_code.as_deref()),
      }),
      None => Self::Fallback(Place::open_sea()),
    }
  }

  pub fn is_resolved(&self) -> bool { matches!(self, Self::Resolved(_)) }

  pub fn place(&self) -> &Place {
    match self {
      Self::Resolved(place) | Self::Fallback(place) => place,
    }
  }

  pub fn into_place(self) -> Place {
    match self {
      Self::Resolved(place) | Self::Fallback(place) => place,
    }
  }
}

/// Uppercase a two-letter code; anything else collapses to `XX`.
fn normalize_country_code(code: Option<&str>) -> String {
  match code {
    Some(c) if c.len() == 2 && c.chars().all(|ch| ch.is_ascii_alphabetic()) => {
      c.to_ascii_uppercase()
    }
    _ => UNKNOWN_COUNTRY_CODE.to_owned(),
  }
}

/// Resolve the country at `(latitude, longitude)`. Never fails.
///
/// Geocoder errors are logged and replaced by the "an unknown location"
/// sentinel; the call is not retried.
pub async fn resolve_country<G>(
  geocoder: &G,
  latitude: f64,
  longitude: f64,
) -> Enrichment
where
  G: ReverseGeocoder,
{
  match geocoder.reverse(latitude, longitude).await {
    Ok(address) => Enrichment::from_address(address),
    Err(e) => {
      tracing::warn!(
        error = %e,
        latitude,
        longitude,
        "reverse geocoding failed, using fallback place"
      );
      Enrichment::Fallback(Place::unknown_location())
    }
  }
}
