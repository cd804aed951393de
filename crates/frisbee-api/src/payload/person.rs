//! Person payload.

use chrono::{DateTime, Utc};
use frisbee_core::{
  attribute::Attribute,
  person::{Person, PersonAttribute},
  timestamp,
};
use serde::{Deserialize, Serialize};

use super::{ValidationError, is_nil_or_empty, require};

const ENTITY: &str = "Person";

/// A person as sent and received over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
  pub user_name:      Option<String>,
  pub name:           Option<String>,
  pub email:          Option<String>,
  pub phone_number:   Option<String>,
  pub wfdf_number:    Option<String>,
  pub origin_country: Option<String>,
  pub created_by:     Option<String>,
  #[serde(default, with = "timestamp::option")]
  pub created_at:     Option<DateTime<Utc>>,
  pub updated_by:     Option<String>,
  #[serde(default, with = "timestamp::option")]
  pub updated_at:     Option<DateTime<Utc>>,
}

impl PersonPayload {
  fn supplied(&self, attribute: PersonAttribute) -> Option<&str> {
    match attribute {
      PersonAttribute::Name => self.name.as_deref(),
      PersonAttribute::Email => self.email.as_deref(),
      PersonAttribute::PhoneNumber => self.phone_number.as_deref(),
      PersonAttribute::WfdfNumber => self.wfdf_number.as_deref(),
      PersonAttribute::OriginCountry => self.origin_country.as_deref(),
      PersonAttribute::UpdatedBy => self.updated_by.as_deref(),
    }
  }

  pub fn changed_attributes(&self) -> Vec<PersonAttribute> {
    PersonAttribute::all()
      .into_iter()
      .filter(|&a| self.supplied(a).is_some())
      .collect()
  }

  pub fn validate_create(&self) -> Result<(), ValidationError> {
    require(ENTITY, "UserName", self.user_name.as_deref())?;
    require(ENTITY, "Name", self.name.as_deref())?;
    require(ENTITY, "Email", self.email.as_deref())?;
    require(ENTITY, "PhoneNumber", self.phone_number.as_deref())?;
    require(ENTITY, "WFDFNumber", self.wfdf_number.as_deref())?;
    require(ENTITY, "OriginCountry", self.origin_country.as_deref())?;
    require(ENTITY, "CreatedBy", self.created_by.as_deref())?;
    Ok(())
  }

  pub fn validate_update(&self, user_name: &str) -> Result<(), ValidationError> {
    if user_name.is_empty() {
      return Err(ValidationError(
        "user name defined in the path variable is empty".into(),
      ));
    }

    if self
      .user_name
      .as_deref()
      .is_some_and(|sent| !sent.is_empty() && sent != user_name)
    {
      return Err(ValidationError(
        "updating the user name is not allowed".into(),
      ));
    }

    if PersonAttribute::all()
      .into_iter()
      .all(|a| is_nil_or_empty(self.supplied(a)))
    {
      return Err(ValidationError(format!(
        "at least one of the following fields should not be empty: {}",
        PersonAttribute::describe_all()
      )));
    }

    Ok(())
  }

  pub fn into_person(self) -> Person {
    Person {
      user_name:      self.user_name.unwrap_or_default(),
      name:           self.name.unwrap_or_default(),
      email:          self.email.unwrap_or_default(),
      phone_number:   self.phone_number.unwrap_or_default(),
      wfdf_number:    self.wfdf_number.unwrap_or_default(),
      origin_country: self.origin_country.unwrap_or_default(),
      created_at:     self.created_at.unwrap_or_default(),
      created_by:     self.created_by.unwrap_or_default(),
      updated_at:     self.updated_at.unwrap_or_default(),
      updated_by:     self.updated_by.unwrap_or_default(),
    }
  }
}

impl From<Person> for PersonPayload {
  fn from(person: Person) -> Self {
    Self {
      user_name:      Some(person.user_name),
      name:           Some(person.name),
      email:          Some(person.email),
      phone_number:   Some(person.phone_number),
      wfdf_number:    Some(person.wfdf_number),
      origin_country: Some(person.origin_country),
      created_by:     Some(person.created_by),
      created_at:     Some(person.created_at),
      updated_by:     Some(person.updated_by),
      updated_at:     Some(person.updated_at),
    }
  }
}

pub fn map_create(payload: PersonPayload) -> Result<Person, ValidationError> {
  payload.validate_create()?;
  Ok(payload.into_person())
}

/// See [`super::team::map_update`].
pub fn map_update(
  mut payload: PersonPayload,
  user_name: &str,
) -> Result<(Person, Vec<PersonAttribute>), ValidationError> {
  payload.validate_update(user_name)?;
  payload.user_name = Some(user_name.to_owned());
  let attributes = payload.changed_attributes();
  Ok((payload.into_person(), attributes))
}
