//! Nominatim reverse-geocoding backend for the hearts service.
//!
//! [`NominatimClient`] implements [`hearts_core::enrich::ReverseGeocoder`]
//! against any Nominatim-compatible `/reverse` endpoint, asking for a
//! country-level answer with English labels.

mod client;
mod dto;

pub mod error;

pub use client::{NominatimClient, NominatimConfig};
pub use error::{Error, Result};
