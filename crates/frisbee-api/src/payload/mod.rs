//! Wire payloads and the mapping between them and domain entities.
//!
//! Every field a client may omit is an `Option`. The mappers turn a payload
//! into a fully populated entity plus, for updates, the list of attributes
//! the client actually sent.

pub mod person;
pub mod team;

use axum::extract::FromRequest;
use thiserror::Error;

use crate::error::ApiError;

/// A request body that broke a business rule. The message is shown to the
/// client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// `Json<T>` whose rejection is our own 400 response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

fn is_nil_or_empty(value: Option<&str>) -> bool {
  value.is_none_or(str::is_empty)
}

/// Fails with `the <entity>'s '<field>' should not be empty`.
fn require(
  entity: &str,
  field: &str,
  value: Option<&str>,
) -> Result<(), ValidationError> {
  if is_nil_or_empty(value) {
    return Err(ValidationError(format!(
      "the {entity}'s '{field}' should not be empty"
    )));
  }
  Ok(())
}

/// Lowercase ASCII alphanumerics separated by single dashes.
fn slugify(name: &str) -> String {
  name
    .split(|c: char| !c.is_ascii_alphanumeric())
    .filter(|part| !part.is_empty())
    .map(str::to_ascii_lowercase)
    .collect::<Vec<_>>()
    .join("-")
}
