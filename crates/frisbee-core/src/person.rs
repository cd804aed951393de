//! A player or staff member registered with the league.

use chrono::{DateTime, Utc};
use strum::{Display, EnumIter, EnumString};

use crate::attribute::Attribute;

/// A person, identified by an immutable `user_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
  pub user_name:      String,
  pub name:           String,
  pub email:          String,
  pub phone_number:   String,
  /// Registration number issued by the World Flying Disc Federation.
  pub wfdf_number:    String,
  pub origin_country: String,
  pub created_at:     DateTime<Utc>,
  pub created_by:     String,
  pub updated_at:     DateTime<Utc>,
  pub updated_by:     String,
}

impl Person {
  pub fn new(user_name: impl Into<String>) -> Self {
    Self {
      user_name: user_name.into(),
      ..Self::default()
    }
  }

  pub fn with_user_name(self, user_name: impl Into<String>) -> Self {
    Self {
      user_name: user_name.into(),
      ..self
    }
  }

  pub fn with_name(self, name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..self
    }
  }

  pub fn with_email(self, email: impl Into<String>) -> Self {
    Self {
      email: email.into(),
      ..self
    }
  }

  pub fn with_phone_number(self, phone_number: impl Into<String>) -> Self {
    Self {
      phone_number: phone_number.into(),
      ..self
    }
  }

  pub fn with_wfdf_number(self, wfdf_number: impl Into<String>) -> Self {
    Self {
      wfdf_number: wfdf_number.into(),
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

/// Fields of a [`Person`] that may be changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum PersonAttribute {
  Name,
  Email,
  PhoneNumber,
  #[strum(serialize = "WFDFNumber")]
  WfdfNumber,
  OriginCountry,
  UpdatedBy,
}

impl Attribute for PersonAttribute {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builders_replace_a_single_field() {
    let original = Person::new("notdougz").with_name("Douglas Olvieira");
    let renamed = original.clone().with_user_name("dougz");

    assert_eq!(renamed.user_name, "dougz");
    assert_eq!(renamed.name, "Douglas Olvieira");
    assert_eq!(original.user_name, "notdougz");
  }

  #[test]
  fn wfdf_keeps_its_acronym() {
    assert_eq!(PersonAttribute::WfdfNumber.to_string(), "WFDFNumber");
    assert_eq!(
      PersonAttribute::describe_all(),
      "[Name, Email, PhoneNumber, WFDFNumber, OriginCountry, UpdatedBy]"
    );
  }

  #[test]
  fn parse_accepts_display_names_only() {
    assert_eq!(
      "WFDFNumber".parse::<PersonAttribute>(),
      Ok(PersonAttribute::WfdfNumber)
    );
    assert_eq!("Email".parse::<PersonAttribute>(), Ok(PersonAttribute::Email));
    assert!("WfdfNumber".parse::<PersonAttribute>().is_err());
    assert!("Slug".parse::<PersonAttribute>().is_err());
  }
}
