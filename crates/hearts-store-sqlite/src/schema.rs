//! SQL schema for the hearts SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Hearts are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS hearts (
    heart_id     TEXT PRIMARY KEY,
    kind         TEXT NOT NULL
                 CHECK (kind IN ('redHeart', 'silverHeart', 'yellowHeart')),
    latitude     REAL NOT NULL,
    longitude    REAL NOT NULL,
    message      TEXT NOT NULL DEFAULT '',
    country_name TEXT NOT NULL DEFAULT 'Unknown',
    country_code TEXT NOT NULL DEFAULT 'XX'
                 CHECK (length(country_code) = 2),
    recorded_at  TEXT NOT NULL    -- RFC 3339 UTC, millisecond precision; server-assigned
);

CREATE INDEX IF NOT EXISTS hearts_recorded_idx ON hearts(recorded_at);

PRAGMA user_version = 1;
";
