//! A person's role on a team over a period of time.
//!
//! Memberships are read-only here: they are written by migrations or seeds
//! and queried by team.

use chrono::{DateTime, Utc};
use strum::{Display, EnumIter, EnumString};

use crate::attribute::Attribute;

/// A membership links a team (by slug) to a person (by user name).
///
/// Only the keys of the linked entities are carried; callers that need the
/// full records fetch them from their own stores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Membership {
  pub team_slug:        String,
  pub person_user_name: String,
  pub role:             String,
  pub start_date:       DateTime<Utc>,
  pub end_date:         Option<DateTime<Utc>>,
  pub created_at:       DateTime<Utc>,
  pub created_by:       String,
  pub updated_at:       DateTime<Utc>,
  pub updated_by:       String,
}

impl Membership {
  pub fn new(
    team_slug: impl Into<String>,
    person_user_name: impl Into<String>,
    role: impl Into<String>,
  ) -> Self {
    Self {
      team_slug: team_slug.into(),
      person_user_name: person_user_name.into(),
      role: role.into(),
      ..Self::default()
    }
  }

  pub fn with_start_date(self, start_date: DateTime<Utc>) -> Self {
    Self { start_date, ..self }
  }

  pub fn with_end_date(self, end_date: DateTime<Utc>) -> Self {
    Self {
      end_date: Some(end_date),
      ..self
    }
  }

  pub fn with_created_by(self, created_by: impl Into<String>) -> Self {
    Self {
      created_by: created_by.into(),
      ..self
    }
  }

  pub fn has_role(&self, role: &str) -> bool { self.role == role }
}

/// Fields of a [`Membership`] that a future update path could change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum MembershipAttribute {
  Role,
  StartDate,
  EndDate,
  UpdatedBy,
}

impl Attribute for MembershipAttribute {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_comparison_is_exact() {
    let m = Membership::new("flying-circus", "notdougz", "Game Captain");
    assert!(m.has_role("Game Captain"));
    assert!(!m.has_role("game captain"));
    assert_eq!(
      MembershipAttribute::describe_all(),
      "[Role, StartDate, EndDate, UpdatedBy]"
    );
  }
}
