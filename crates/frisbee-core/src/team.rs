//! A named squad registered by a user.

use chrono::{DateTime, Utc};
use strum::{Display, EnumIter, EnumString};

use crate::attribute::Attribute;

/// A team. `slug` is fixed at creation; `name` is unique and is the key
/// clients use to address the team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
  pub slug:           String,
  pub name:           String,
  pub description:    String,
  pub origin_country: String,
  pub created_at:     DateTime<Utc>,
  pub created_by:     String,
  pub updated_at:     DateTime<Utc>,
  pub updated_by:     String,
}

impl Team {
  pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      slug: slug.into(),
      name: name.into(),
      ..Self::default()
    }
  }

  pub fn with_name(self, name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..self
    }
  }

  pub fn with_description(self, description: impl Into<String>) -> Self {
    Self {
      description: description.into(),
      ..self
    }
  }

  pub fn with_origin_country(self, origin_country: impl Into<String>) -> Self {
    Self {
      origin_country: origin_country.into(),
      ..self
    }
  }

  pub fn with_created_by(self, created_by: impl Into<String>) -> Self {
    Self {
      created_by: created_by.into(),
      ..self
    }
  }

  pub fn with_updated_by(self, updated_by: impl Into<String>) -> Self {
    Self {
      updated_by: updated_by.into(),
      ..self
    }
  }
}

/// Fields of a [`Team`] that may be changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum TeamAttribute {
  Description,
  OriginCountry,
  UpdatedBy,
}

impl Attribute for TeamAttribute {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builders_leave_the_original_untouched() {
    let original = Team::new("t1", "Alpha").with_description("d1");
    let changed = original.clone().with_description("d2");

    assert_eq!(original.description, "d1");
    assert_eq!(changed.description, "d2");
    assert_eq!(changed.slug, "t1");
  }

  #[test]
  fn attributes_are_listed_in_declaration_order() {
    assert_eq!(
      TeamAttribute::describe_all(),
      "[Description, OriginCountry, UpdatedBy]"
    );
  }
}
