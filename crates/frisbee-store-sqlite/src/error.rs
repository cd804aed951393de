//! Error type for `frisbee-store-sqlite`.

use frisbee_core::store::{StoreError, StoreErrorKind};
use thiserror::Error;

use crate::client::Violation;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] frisbee_core::Error),

  /// A constraint rejected the statement. Built by the `From` impl below
  /// whenever SQLite reports a constraint failure.
  #[error("{violation} constraint violated: {source}")]
  Constraint {
    violation: Violation,
    #[source]
    source:    tokio_rusqlite::Error,
  },

  #[error("database error: {0}")]
  Database(#[source] tokio_rusqlite::Error),

  /// An `INSERT ... RETURNING` did not hand back exactly one row.
  #[error("inserting {entity} '{key}' returned {returned} rows")]
  UnexpectedRows {
    entity:   &'static str,
    key:      String,
    returned: usize,
  },

  /// A failure tagged with the store operation that hit it.
  #[error("{context}: {source}")]
  Context {
    context: String,
    #[source]
    source:  Box<Error>,
  },
}

impl Error {
  pub(crate) fn within(self, context: impl Into<String>) -> Self {
    Self::Context {
      context: context.into(),
      source:  Box::new(self),
    }
  }

  /// The constraint that rejected the statement, looking through any
  /// operation context.
  pub fn violation(&self) -> Option<Violation> {
    match self {
      Self::Constraint { violation, .. } => Some(*violation),
      Self::Context { source, .. } => source.violation(),
      Self::Core(_) | Self::Database(_) | Self::UnexpectedRows { .. } => None,
    }
  }
}

impl From<tokio_rusqlite::Error> for Error {
  fn from(err: tokio_rusqlite::Error) -> Self {
    match Violation::classify(&err) {
      Some(violation) => Self::Constraint {
        violation,
        source: err,
      },
      None => Self::Database(err),
    }
  }
}

impl StoreError for Error {
  fn kind(&self) -> StoreErrorKind {
    match self.violation() {
      Some(violation) if violation.is_uniqueness() => {
        StoreErrorKind::AlreadyExists
      }
      _ => StoreErrorKind::Other,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
