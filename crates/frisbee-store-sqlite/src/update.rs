//! Partial-update statements.
//!
//! Each attribute enum maps every variant to the column it writes and a
//! function pulling the new value out of the entity. The match is exhaustive,
//! so a new attribute does not compile until it has a column.

use frisbee_core::{
  attribute::Attribute,
  person::{Person, PersonAttribute},
  team::{Team, TeamAttribute},
};
use rusqlite::types::Value;

/// Appended to every update. Takes the later of the clock and one
/// millisecond past the stored value, so `updated_at` strictly increases
/// even for two writes inside the same millisecond.
const TOUCH_UPDATED_AT: &str = "updated_at = max(\
  strftime('%Y-%m-%dT%H:%M:%fZ', 'now'), \
  strftime('%Y-%m-%dT%H:%M:%fZ', updated_at, '+0.001 seconds'))";

/// Where an attribute lives in its table.
pub struct Column<E> {
  pub name:  &'static str,
  pub value: fn(&E) -> Value,
}

pub trait Columns: Attribute {
  type Entity;

  fn column(self) -> Column<Self::Entity>;
}

impl Columns for TeamAttribute {
  type Entity = Team;

  fn column(self) -> Column<Team> {
    match self {
      Self::Description => Column {
        name:  "description",
        value: |t| Value::Text(t.description.clone()),
      },
      Self::OriginCountry => Column {
        name:  "origin_country",
        value: |t| Value::Text(t.origin_country.clone()),
      },
      Self::UpdatedBy => Column {
        name:  "updated_by",
        value: |t| Value::Text(t.updated_by.clone()),
      },
    }
  }
}

impl Columns for PersonAttribute {
  type Entity = Person;

  fn column(self) -> Column<Person> {
    match self {
      Self::Name => Column {
        name:  "name",
        value: |p| Value::Text(p.name.clone()),
      },
      Self::Email => Column {
        name:  "email",
        value: |p| Value::Text(p.email.clone()),
      },
      Self::PhoneNumber => Column {
        name:  "phone_number",
        value: |p| Value::Text(p.phone_number.clone()),
      },
      Self::WfdfNumber => Column {
        name:  "wfdf_number",
        value: |p| Value::Text(p.wfdf_number.clone()),
      },
      Self::OriginCountry => Column {
        name:  "origin_country",
        value: |p| Value::Text(p.origin_country.clone()),
      },
      Self::UpdatedBy => Column {
        name:  "updated_by",
        value: |p| Value::Text(p.updated_by.clone()),
      },
    }
  }
}

/// An `UPDATE` with its positional parameters.
#[derive(Debug)]
pub struct UpdateStatement {
  pub sql:    String,
  pub params: Vec<Value>,
}

/// Build `UPDATE <table> SET ... WHERE <key_column> = <key>`.
///
/// One assignment per distinct attribute, in the order given, followed by
/// the `updated_at` refresh. Repeated attributes are written once.
pub fn build_update<A: Columns>(
  table: &str,
  key_column: &str,
  key: &str,
  entity: &A::Entity,
  attributes: &[A],
) -> UpdateStatement {
  let mut written: Vec<A> = Vec::with_capacity(attributes.len());
  let mut assignments = Vec::with_capacity(attributes.len() + 1);
  let mut params = Vec::with_capacity(attributes.len() + 1);

  for &attribute in attributes {
    if written.contains(&attribute) {
      continue;
    }
    written.push(attribute);

    let column = attribute.column();
    params.push((column.value)(entity));
    assignments.push(format!("{} = ?{}", column.name, params.len()));
  }
  assignments.push(TOUCH_UPDATED_AT.to_owned());

  params.push(Value::Text(key.to_owned()));
  let sql = format!(
    "UPDATE {table} SET {} WHERE {key_column} = ?{}",
    assignments.join(", "),
    params.len()
  );

  UpdateStatement { sql, params }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn team() -> Team {
    Team::new("t1", "Alpha")
      .with_description("d2")
      .with_origin_country("BRA")
      .with_updated_by("editor")
  }

  #[test]
  fn only_named_columns_are_assigned() {
    let stmt = build_update(
      "teams",
      "name",
      "Alpha",
      &team(),
      &[TeamAttribute::Description],
    );

    assert_eq!(
      stmt.sql,
      format!(
        "UPDATE teams SET description = ?1, {TOUCH_UPDATED_AT} WHERE name = ?2"
      )
    );
    assert_eq!(
      stmt.params,
      vec![Value::Text("d2".into()), Value::Text("Alpha".into())]
    );
  }

  #[test]
  fn assignments_follow_the_given_order() {
    let stmt = build_update(
      "teams",
      "name",
      "Alpha",
      &team(),
      &[TeamAttribute::UpdatedBy, TeamAttribute::OriginCountry],
    );

    assert!(
      stmt
        .sql
        .starts_with("UPDATE teams SET updated_by = ?1, origin_country = ?2, "),
      "{}",
      stmt.sql
    );
    assert_eq!(stmt.params[0], Value::Text("editor".into()));
    assert_eq!(stmt.params[1], Value::Text("BRA".into()));
    assert!(stmt.sql.ends_with("WHERE name = ?3"));
  }

  #[test]
  fn repeated_attributes_are_written_once() {
    let stmt = build_update(
      "teams",
      "name",
      "Alpha",
      &team(),
      &[TeamAttribute::Description, TeamAttribute::Description],
    );

    assert_eq!(stmt.params.len(), 2);
    assert_eq!(stmt.sql.matches("description = ").count(), 1);
  }

  #[test]
  fn empty_attribute_list_still_touches_updated_at() {
    let stmt = build_update::<TeamAttribute>(
      "teams",
      "name",
      "Alpha",
      &team(),
      &[],
    );

    assert_eq!(
      stmt.sql,
      format!("UPDATE teams SET {TOUCH_UPDATED_AT} WHERE name = ?1")
    );
  }

  #[test]
  fn wfdf_number_maps_to_its_column() {
    let person = Person::new("notdougz").with_wfdf_number("12");
    let stmt = build_update(
      "people",
      "user_name",
      "notdougz",
      &person,
      &[PersonAttribute::WfdfNumber],
    );

    assert!(stmt.sql.contains("wfdf_number = ?1"), "{}", stmt.sql);
    assert!(stmt.sql.ends_with("WHERE user_name = ?2"));
  }
}
