//! [`SqliteStore`] — the SQLite implementation of [`HeartStore`].

use std::path::Path;

use uuid::Uuid;

use hearts_core::{
  heart::{Heart, NewHeart},
  store::HeartStore,
};

use crate::{
  Result,
  encode::{HEART_COLUMNS, RawHeart, encode_dt, encode_kind, encode_uuid, now},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A hearts store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── HeartStore impl ─────────────────────────────────────────────────────────

impl HeartStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, input: NewHeart) -> Result<Heart> {
    let heart = Heart {
      id:        Uuid::new_v4(),
      kind:      input.kind,
      latitude:  input.latitude,
      longitude: input.longitude,
      message:   input.message,
      place:     input.place,
      timestamp: now(),
    };

    let id_str       = encode_uuid(heart.id);
    let kind_str     = encode_kind(heart.kind);
    let latitude     = heart.latitude;
    let longitude    = heart.longitude;
    let message      = heart.message.clone();
    let country_name = heart.place.country_name.clone();
    let country_code = heart.place.country_code.clone();
    let at_str       = encode_dt(heart.timestamp);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO hearts (
             heart_id, kind, latitude, longitude, message,
             country_name, country_code, recorded_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            kind_str,
            latitude,
            longitude,
            message,
            country_name,
            country_code,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(heart_id = %heart.id, "heart inserted");
    Ok(heart)
  }

  async fn list_newest_first(&self) -> Result<Vec<Heart>> {
    let raws: Vec<RawHeart> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {HEART_COLUMNS} FROM hearts
           ORDER BY recorded_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], RawHeart::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawHeart::into_heart).collect()
  }
}
