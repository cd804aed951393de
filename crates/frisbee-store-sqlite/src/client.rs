//! Query/command client over a single SQLite connection.
//!
//! Every statement takes positional parameters (`?1`, `?2`, ...) as owned
//! [`Value`]s so it can be shipped to the connection thread.

use std::path::Path;

use rusqlite::{Row, ffi, params_from_iter, types::Value};
use strum::Display;

use crate::Result;

// ─── Violations ──────────────────────────────────────────────────────────────

/// The constraint that rejected a statement, read from SQLite's extended
/// result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Violation {
  Unique,
  #[strum(serialize = "primary key")]
  PrimaryKey,
  #[strum(serialize = "foreign key")]
  ForeignKey,
  #[strum(serialize = "not null")]
  NotNull,
  Check,
}

impl Violation {
  /// Returns `None` for anything that is not a constraint failure.
  pub fn classify(err: &tokio_rusqlite::Error) -> Option<Self> {
    let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
      failure,
      _,
    )) = err
    else {
      return None;
    };

    match failure.extended_code {
      ffi::SQLITE_CONSTRAINT_UNIQUE => Some(Self::Unique),
      ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Some(Self::PrimaryKey),
      ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Self::ForeignKey),
      ffi::SQLITE_CONSTRAINT_NOTNULL => Some(Self::NotNull),
      ffi::SQLITE_CONSTRAINT_CHECK => Some(Self::Check),
      _ => None,
    }
  }

  /// Whether the row clashed with an existing one.
  pub fn is_uniqueness(self) -> bool {
    matches!(self, Self::Unique | Self::PrimaryKey)
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Row counts reported by [`Client::execute_query`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryResult {
  /// Rows written by the statement; zero for plain `SELECT`s.
  pub rows_affected: usize,
  pub rows_returned: usize,
}

/// The inner connection is reference-counted, so clones share it.
#[derive(Clone)]
pub(crate) struct Client {
  conn: tokio_rusqlite::Connection,
}

impl Client {
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Ok(Self { conn })
  }

  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Ok(Self { conn })
  }

  pub async fn execute_batch(&self, sql: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a statement that yields rows, mapping each one with `map`.
  ///
  /// Works for `INSERT ... RETURNING` as well; `rows_affected` then counts
  /// the inserted rows.
  pub async fn execute_query<T, F>(
    &self,
    sql: impl Into<String>,
    params: Vec<Value>,
    map: F,
  ) -> Result<(Vec<T>, QueryResult)>
  where
    T: Send + 'static,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let sql = sql.into();
    let out = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(&sql)?;
        let rows = stmt
          .query_map(params_from_iter(params.iter()), map)?
          .collect::<rusqlite::Result<Vec<T>>>()?;
        let rows_affected = if stmt.readonly() {
          0
        } else {
          conn.changes() as usize
        };
        let result = QueryResult {
          rows_affected,
          rows_returned: rows.len(),
        };
        Ok((rows, result))
      })
      .await?;
    Ok(out)
  }

  /// Run a statement that yields no rows; returns the rows it changed.
  pub async fn execute_command(
    &self,
    sql: impl Into<String>,
    params: Vec<Value>,
  ) -> Result<usize> {
    let sql = sql.into();
    let affected = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(&sql)?;
        Ok(stmt.execute(params_from_iter(params.iter()))?)
      })
      .await?;
    Ok(affected)
  }
}
