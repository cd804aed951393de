//! The vocabulary of partial updates.
//!
//! Every entity that can be patched exposes a closed enum naming its
//! updatable fields. The API mapper emits these values and the store maps each
//! one to a column, so adding a variant forces both sides to handle it.

use std::{fmt, str::FromStr};

use strum::IntoEnumIterator;

/// A closed set of updatable fields for one entity type.
///
/// The iteration order is part of the public contract: validation messages
/// list the attributes in this order. `FromStr` accepts exactly the display
/// names and rejects anything else.
pub trait Attribute:
  Copy
  + Eq
  + fmt::Debug
  + fmt::Display
  + FromStr<Err = strum::ParseError>
  + IntoEnumIterator
  + Send
  + Sync
  + 'static
{
  /// Every attribute, in declaration order.
  fn all() -> Vec<Self> { Self::iter().collect() }

  /// `[A, B, C]`, as shown to clients when an update names no field.
  fn describe_all() -> String {
    let names: Vec<String> = Self::iter().map(|a| a.to_string()).collect();
    format!("[{}]", names.join(", "))
  }
}
