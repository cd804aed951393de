//! Team payload.

use chrono::{DateTime, Utc};
use frisbee_core::{
  attribute::Attribute,
  team::{Team, TeamAttribute},
  timestamp,
};
use serde::{Deserialize, Serialize};

use super::{ValidationError, is_nil_or_empty, require, slugify};

/// A team as sent and received over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayload {
  pub slug:           Option<String>,
  pub name:           Option<String>,
  pub description:    Option<String>,
  pub origin_country: Option<String>,
  pub created_by:     Option<String>,
  #[serde(default, with = "timestamp::option")]
  pub created_at:     Option<DateTime<Utc>>,
  pub updated_by:     Option<String>,
  #[serde(default, with = "timestamp::option")]
  pub updated_at:     Option<DateTime<Utc>>,
}

impl TeamPayload {
  /// The value sent for `attribute`, if any.
  fn supplied(&self, attribute: TeamAttribute) -> Option<&str> {
    match attribute {
      TeamAttribute::Description => self.description.as_deref(),
      TeamAttribute::OriginCountry => self.origin_country.as_deref(),
      TeamAttribute::UpdatedBy => self.updated_by.as_deref(),
    }
  }

  /// Attributes present in the body, empty strings included, in
  /// declaration order.
  pub fn changed_attributes(&self) -> Vec<TeamAttribute> {
    TeamAttribute::all()
      .into_iter()
      .filter(|&a| self.supplied(a).is_some())
      .collect()
  }

  pub fn validate_create(&self) -> Result<(), ValidationError> {
    require("team", "Name", self.name.as_deref())?;
    require("team", "Description", self.description.as_deref())?;
    require("team", "Origin Country", self.origin_country.as_deref())?;
    require("team", "Created By", self.created_by.as_deref())?;
    Ok(())
  }

  pub fn validate_update(&self, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
      return Err(ValidationError(
        "team name defined in the path variable is empty".into(),
      ));
    }

    if self
      .name
      .as_deref()
      .is_some_and(|sent| !sent.is_empty() && sent != name)
    {
      return Err(ValidationError(
        "updating the team name is not allowed".into(),
      ));
    }

    if TeamAttribute::all()
      .into_iter()
      .all(|a| is_nil_or_empty(self.supplied(a)))
    {
      return Err(ValidationError(format!(
        "at least one of the following fields should not be empty: {}",
        TeamAttribute::describe_all()
      )));
    }

    Ok(())
  }

  /// Absent optionals become empty strings / the epoch.
  pub fn into_team(self) -> Team {
    Team {
      slug:           self.slug.unwrap_or_default(),
      name:           self.name.unwrap_or_default(),
      description:    self.description.unwrap_or_default(),
      origin_country: self.origin_country.unwrap_or_default(),
      created_at:     self.created_at.unwrap_or_default(),
      created_by:     self.created_by.unwrap_or_default(),
      updated_at:     self.updated_at.unwrap_or_default(),
      updated_by:     self.updated_by.unwrap_or_default(),
    }
  }
}

impl From<Team> for TeamPayload {
  fn from(team: Team) -> Self {
    Self {
      slug:           Some(team.slug),
      name:           Some(team.name),
      description:    Some(team.description),
      origin_country: Some(team.origin_country),
      created_by:     Some(team.created_by),
      created_at:     Some(team.created_at),
      updated_by:     Some(team.updated_by),
      updated_at:     Some(team.updated_at),
    }
  }
}

/// Validate a create body and build the team to insert. A missing slug is
/// derived from the name.
pub fn map_create(payload: TeamPayload) -> Result<Team, ValidationError> {
  payload.validate_create()?;
  let mut team = payload.into_team();
  if team.slug.is_empty() {
    team.slug = slugify(&team.name);
  }
  require("team", "Slug", Some(team.slug.as_str()))?;
  Ok(team)
}

/// Validate an update body addressed to the team called `name`.
///
/// Returns the draft with `name` as its identity, plus the attributes to
/// write.
pub fn map_update(
  mut payload: TeamPayload,
  name: &str,
) -> Result<(Team, Vec<TeamAttribute>), ValidationError> {
  payload.validate_update(name)?;
  payload.name = Some(name.to_owned());
  let attributes = payload.changed_attributes();
  Ok((payload.into_team(), attributes))
}
