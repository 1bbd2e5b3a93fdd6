//! Wire types for Nominatim `/reverse` responses.
//!
//! Only the fields the service reads are modelled; everything else in the
//! payload is ignored.

use hearts_core::enrich::Address;
use serde::Deserialize;

/// Top-level `/reverse?format=json` body.
///
/// Over open water Nominatim answers `{"error":"Unable to geocode"}` with a
/// 200 status, so `address` is optional.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
  pub address: Option<AddressDto>,
}

#[derive(Debug, Deserialize)]
pub struct AddressDto {
  pub country:      Option<String>,
  pub country_code: Option<String>,
}

impl ReverseResponse {
  pub fn into_address(self) -> Option<Address> {
    self.address.map(|a| Address {
      country:      a.country,
      country_code: a.country_code,
    })
  }
}
