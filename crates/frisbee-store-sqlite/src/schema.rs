//! SQL schema for the registry.
//!
//! Applied on every open. The applied version is recorded in
//! `PRAGMA user_version`; future migrations will be gated on it.

pub const SCHEMA_VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Timestamps use the same layout as `frisbee_core::timestamp`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS teams (
    slug           TEXT PRIMARY KEY,
    name           TEXT NOT NULL UNIQUE,
    description    TEXT NOT NULL DEFAULT '',
    origin_country TEXT NOT NULL DEFAULT '',
    created_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    created_by     TEXT NOT NULL DEFAULT '',
    updated_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_by     TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS people (
    user_name      TEXT PRIMARY KEY,
    name           TEXT NOT NULL DEFAULT '',
    email          TEXT NOT NULL DEFAULT '',
    phone_number   TEXT NOT NULL DEFAULT '',
    wfdf_number    TEXT NOT NULL DEFAULT '',
    origin_country TEXT NOT NULL DEFAULT '',
    created_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    created_by     TEXT NOT NULL DEFAULT '',
    updated_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_by     TEXT NOT NULL DEFAULT ''
);

-- One row per role a person holds on a team.
CREATE TABLE IF NOT EXISTS memberships (
    team_slug        TEXT NOT NULL REFERENCES teams(slug),
    person_user_name TEXT NOT NULL REFERENCES people(user_name),
    role             TEXT NOT NULL,
    start_date       TEXT NOT NULL,
    end_date         TEXT,            -- NULL while the membership is open
    created_at       TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    created_by       TEXT NOT NULL DEFAULT '',
    updated_at       TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_by       TEXT NOT NULL DEFAULT '',
    PRIMARY KEY (team_slug, person_user_name, role)
);

CREATE INDEX IF NOT EXISTS memberships_team_idx ON memberships(team_slug);

PRAGMA user_version = 1;
";
