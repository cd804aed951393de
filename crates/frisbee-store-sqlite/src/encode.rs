//! Conversion between domain types and the plain-text rows stored in SQLite.
//!
//! Timestamps are stored in the canonical layout from
//! [`frisbee_core::timestamp`]; every other column is plain text.

use frisbee_core::{
  membership::Membership,
  person::Person,
  team::Team,
  timestamp::parse_timestamp,
};
use rusqlite::Row;

use crate::Result;

// ─── Column lists ────────────────────────────────────────────────────────────

pub const TEAM_COLUMNS: &str = "slug, name, description, origin_country, \
                                created_at, created_by, updated_at, updated_by";

pub const PERSON_COLUMNS: &str = "user_name, name, email, phone_number, \
                                  wfdf_number, origin_country, created_at, \
                                  created_by, updated_at, updated_by";

pub const MEMBERSHIP_COLUMNS: &str = "team_slug, person_user_name, role, \
                                      start_date, end_date, created_at, \
                                      created_by, updated_at, updated_by";

// ─── Team ────────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `teams` row.
pub struct RawTeam {
  pub slug:           String,
  pub name:           String,
  pub description:    String,
  pub origin_country: String,
  pub created_at:     String,
  pub created_by:     String,
  pub updated_at:     String,
  pub updated_by:     String,
}

impl RawTeam {
  /// Expects the columns of [`TEAM_COLUMNS`], in order.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      slug:           row.get(0)?,
      name:           row.get(1)?,
      description:    row.get(2)?,
      origin_country: row.get(3)?,
      created_at:     row.get(4)?,
      created_by:     row.get(5)?,
      updated_at:     row.get(6)?,
      updated_by:     row.get(7)?,
    })
  }

  pub fn into_team(self) -> Result<Team> {
    Ok(Team {
      slug:           self.slug,
      name:           self.name,
      description:    self.description,
      origin_country: self.origin_country,
      created_at:     parse_timestamp(&self.created_at)?,
      created_by:     self.created_by,
      updated_at:     parse_timestamp(&self.updated_at)?,
      updated_by:     self.updated_by,
    })
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `people` row.
pub struct RawPerson {
  pub user_name:      String,
  pub name:           String,
  pub email:          String,
  pub phone_number:   String,
  pub wfdf_number:    String,
  pub origin_country: String,
  pub created_at:     String,
  pub created_by:     String,
  pub updated_at:     String,
  pub updated_by:     String,
}

impl RawPerson {
  /// Expects the columns of [`PERSON_COLUMNS`], in order.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_name:      row.get(0)?,
      name:           row.get(1)?,
      email:          row.get(2)?,
      phone_number:   row.get(3)?,
      wfdf_number:    row.get(4)?,
      origin_country: row.get(5)?,
      created_at:     row.get(6)?,
      created_by:     row.get(7)?,
      updated_at:     row.get(8)?,
      updated_by:     row.get(9)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      user_name:      self.user_name,
      name:           self.name,
      email:          self.email,
      phone_number:   self.phone_number,
      wfdf_number:    self.wfdf_number,
      origin_country: self.origin_country,
      created_at:     parse_timestamp(&self.created_at)?,
      created_by:     self.created_by,
      updated_at:     parse_timestamp(&self.updated_at)?,
      updated_by:     self.updated_by,
    })
  }
}

// ─── Membership ──────────────────────────────────────────────────────────────

/// Raw strings read directly from a `memberships` row.
pub struct RawMembership {
  pub team_slug:        String,
  pub person_user_name: String,
  pub role:             String,
  pub start_date:       String,
  pub end_date:         Option<String>,
  pub created_at:       String,
  pub created_by:       String,
  pub updated_at:       String,
  pub updated_by:       String,
}

impl RawMembership {
  /// Expects the columns of [`MEMBERSHIP_COLUMNS`], in order.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      team_slug:        row.get(0)?,
      person_user_name: row.get(1)?,
      role:             row.get(2)?,
      start_date:       row.get(3)?,
      end_date:         row.get(4)?,
      created_at:       row.get(5)?,
      created_by:       row.get(6)?,
      updated_at:       row.get(7)?,
      updated_by:       row.get(8)?,
    })
  }

  pub fn into_membership(self) -> Result<Membership> {
    Ok(Membership {
      team_slug:        self.team_slug,
      person_user_name: self.person_user_name,
      role:             self.role,
      start_date:       parse_timestamp(&self.start_date)?,
      end_date:         self
        .end_date
        .as_deref()
        .map(parse_timestamp)
        .transpose()?,
      created_at:       parse_timestamp(&self.created_at)?,
      created_by:       self.created_by,
      updated_at:       parse_timestamp(&self.updated_at)?,
      updated_by:       self.updated_by,
    })
  }
}
