//! Error types for `frisbee-core`.

use thiserror::Error;

use crate::store::{StoreError, StoreErrorKind};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid timestamp {value:?}: {source}")]
  Timestamp {
    value:  String,
    #[source]
    source: chrono::ParseError,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A store failure wrapped with the operation that triggered it.
///
/// The `AlreadyExists` variant survives any number of re-wrappings so the HTTP
/// layer can still branch on it after the error crossed several layers.
#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("{context}: {source}")]
  AlreadyExists {
    context: String,
    #[source]
    source:  BoxError,
  },

  #[error("{context}: {source}")]
  Store {
    context: String,
    #[source]
    source:  BoxError,
  },
}

impl ServiceError {
  /// Wrap a classified store error with `context`.
  pub fn from_store<E: StoreError>(context: impl Into<String>, err: E) -> Self {
    let context = context.into();
    match err.kind() {
      StoreErrorKind::AlreadyExists => Self::AlreadyExists {
        context,
        source: Box::new(err),
      },
      StoreErrorKind::Other => Self::Store {
        context,
        source: Box::new(err),
      },
    }
  }

  /// Add another layer of context, keeping the variant.
  pub fn within(self, context: impl Into<String>) -> Self {
    let context = context.into();
    if self.is_already_exists() {
      Self::AlreadyExists {
        context,
        source: Box::new(self),
      }
    } else {
      Self::Store {
        context,
        source: Box::new(self),
      }
    }
  }

  pub fn is_already_exists(&self) -> bool {
    matches!(self, Self::AlreadyExists { .. })
  }
}
