//! [`SqliteStore`], the SQLite implementation of the store ports.

use std::path::Path;

use frisbee_core::{
  membership::Membership,
  person::{Person, PersonAttribute},
  store::{MembershipStore, PersonStore, Store, TeamStore},
  team::{Team, TeamAttribute},
  timestamp::format_timestamp,
};
use rusqlite::types::Value;

use crate::{
  Error, Result,
  client::{Client, QueryResult},
  encode::{
    MEMBERSHIP_COLUMNS, PERSON_COLUMNS, RawMembership, RawPerson, RawTeam,
    TEAM_COLUMNS,
  },
  schema::SCHEMA,
  update::build_update,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A registry store backed by a single SQLite file.
///
/// The inner connection is reference-counted, so clones share it.
#[derive(Clone)]
pub struct SqliteStore {
  client: Client,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self {
      client: Client::open(path).await?,
    };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a store backed by an in-memory database.
  pub async fn open_in_memory() -> Result<Self> {
    let store = Self {
      client: Client::open_in_memory().await?,
    };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self.client.execute_batch(SCHEMA).await
  }

  /// The `PRAGMA user_version` recorded by the last applied schema.
  pub async fn schema_version(&self) -> Result<i64> {
    let (rows, _) = self
      .client
      .execute_query("PRAGMA user_version", Vec::new(), |row| {
        row.get::<_, i64>(0)
      })
      .await?;
    Ok(rows.into_iter().next().unwrap_or_default())
  }

  /// Record a membership. There is no HTTP path for this; seeds and tests
  /// use it.
  pub async fn add_membership(&self, membership: &Membership) -> Result<()> {
    self
      .client
      .execute_command(
        "INSERT INTO memberships (
           team_slug, person_user_name, role, start_date, end_date, created_by
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        vec![
          Value::Text(membership.team_slug.clone()),
          Value::Text(membership.person_user_name.clone()),
          Value::Text(membership.role.clone()),
          Value::Text(format_timestamp(membership.start_date)),
          membership
            .end_date
            .map_or(Value::Null, |at| Value::Text(format_timestamp(at))),
          Value::Text(membership.created_by.clone()),
        ],
      )
      .await
      .map_err(|e| {
        e.within(format!(
          "failed to add membership of '{}' to team '{}'",
          membership.person_user_name, membership.team_slug
        ))
      })?;
    Ok(())
  }

  async fn query_teams(
    &self,
    sql: String,
    params: Vec<Value>,
  ) -> Result<Vec<Team>> {
    let (raws, _) = self
      .client
      .execute_query(sql, params, RawTeam::from_row)
      .await?;
    raws.into_iter().map(RawTeam::into_team).collect()
  }

  async fn query_people(
    &self,
    sql: String,
    params: Vec<Value>,
  ) -> Result<Vec<Person>> {
    let (raws, _) = self
      .client
      .execute_query(sql, params, RawPerson::from_row)
      .await?;
    raws.into_iter().map(RawPerson::into_person).collect()
  }
}

/// The one row an `INSERT ... RETURNING` is expected to hand back.
fn inserted<T>(
  rows: Vec<T>,
  result: QueryResult,
  entity: &'static str,
  key: &str,
) -> Result<T> {
  match (result.rows_returned, rows.into_iter().next()) {
    (1, Some(row)) => Ok(row),
    (returned, _) => Err(Error::UnexpectedRows {
      entity,
      key: key.to_owned(),
      returned,
    }),
  }
}

// ─── Store impls ─────────────────────────────────────────────────────────────

impl Store for SqliteStore {
  type Error = Error;

  async fn ping(&self) -> Result<()> {
    self
      .client
      .execute_query("SELECT 1", Vec::new(), |row| row.get::<_, i64>(0))
      .await
      .map_err(|e| e.within("unable to ping database"))?;
    Ok(())
  }
}

impl TeamStore for SqliteStore {
  async fn get_all_teams(&self) -> Result<Vec<Team>> {
    self
      .query_teams(
        format!("SELECT {TEAM_COLUMNS} FROM teams ORDER BY name"),
        Vec::new(),
      )
      .await
      .map_err(|e| e.within("failed to retrieve all teams"))
  }

  async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
    let teams = self
      .query_teams(
        format!("SELECT {TEAM_COLUMNS} FROM teams WHERE name = ?1"),
        vec![Value::Text(name.to_owned())],
      )
      .await
      .map_err(|e| e.within(format!("failed to retrieve team '{name}'")))?;
    Ok(teams.into_iter().next())
  }

  async fn create_team(&self, team: &Team) -> Result<Team> {
    let (raws, result) = self
      .client
      .execute_query(
        format!(
          "INSERT INTO teams (
             slug, name, description, origin_country, created_by, updated_by
           ) VALUES (?1, ?2, ?3, ?4, ?5, coalesce(nullif(?6, ''), ?5))
           RETURNING {TEAM_COLUMNS}"
        ),
        vec![
          Value::Text(team.slug.clone()),
          Value::Text(team.name.clone()),
          Value::Text(team.description.clone()),
          Value::Text(team.origin_country.clone()),
          Value::Text(team.created_by.clone()),
          Value::Text(team.updated_by.clone()),
        ],
        RawTeam::from_row,
      )
      .await
      .map_err(|e| e.within("failed to create team"))?;

    tracing::debug!(
      slug = %team.slug,
      name = %team.name,
      rows_affected = result.rows_affected,
      "team inserted"
    );
    inserted(raws, result, "team", &team.name)?.into_team()
  }

  async fn update_team(
    &self,
    name: &str,
    team: &Team,
    attributes: &[TeamAttribute],
  ) -> Result<Option<Team>> {
    let stmt = build_update("teams", "name", name, team, attributes);
    let affected = self
      .client
      .execute_command(stmt.sql, stmt.params)
      .await
      .map_err(|e| e.within("failed to update team"))?;
    if affected == 0 {
      return Ok(None);
    }

    tracing::debug!(name, ?attributes, "team updated");
    self.get_team_by_name(name).await
  }
}

impl PersonStore for SqliteStore {
  async fn get_all_people(&self) -> Result<Vec<Person>> {
    self
      .query_people(
        format!("SELECT {PERSON_COLUMNS} FROM people ORDER BY user_name"),
        Vec::new(),
      )
      .await
      .map_err(|e| e.within("failed to retrieve all people"))
  }

  async fn get_person_by_user_name(
    &self,
    user_name: &str,
  ) -> Result<Option<Person>> {
    let people = self
      .query_people(
        format!("SELECT {PERSON_COLUMNS} FROM people WHERE user_name = ?1"),
        vec![Value::Text(user_name.to_owned())],
      )
      .await
      .map_err(|e| {
        e.within(format!("failed to retrieve person '{user_name}'"))
      })?;
    Ok(people.into_iter().next())
  }

  async fn create_person(&self, person: &Person) -> Result<Person> {
    let (raws, result) = self
      .client
      .execute_query(
        format!(
          "INSERT INTO people (
             user_name, name, email, phone_number, wfdf_number,
             origin_country, created_by, updated_by
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, coalesce(nullif(?8, ''), ?7))
           RETURNING {PERSON_COLUMNS}"
        ),
        vec![
          Value::Text(person.user_name.clone()),
          Value::Text(person.name.clone()),
          Value::Text(person.email.clone()),
          Value::Text(person.phone_number.clone()),
          Value::Text(person.wfdf_number.clone()),
          Value::Text(person.origin_country.clone()),
          Value::Text(person.created_by.clone()),
          Value::Text(person.updated_by.clone()),
        ],
        RawPerson::from_row,
      )
      .await
      .map_err(|e| e.within("failed to create person"))?;

    tracing::debug!(
      user_name = %person.user_name,
      rows_affected = result.rows_affected,
      "person inserted"
    );
    inserted(raws, result, "person", &person.user_name)?.into_person()
  }

  async fn update_person(
    &self,
    user_name: &str,
    person: &Person,
    attributes: &[PersonAttribute],
  ) -> Result<Option<Person>> {
    let stmt =
      build_update("people", "user_name", user_name, person, attributes);
    let affected = self
      .client
      .execute_command(stmt.sql, stmt.params)
      .await
      .map_err(|e| e.within("failed to update person"))?;
    if affected == 0 {
      return Ok(None);
    }

    tracing::debug!(user_name, ?attributes, "person updated");
    self.get_person_by_user_name(user_name).await
  }
}

impl MembershipStore for SqliteStore {
  async fn get_memberships_by_team_slug(
    &self,
    team_slug: &str,
  ) -> Result<Vec<Membership>> {
    let context =
      || format!("failed to retrieve memberships of team '{team_slug}'");
    let (raws, _) = self
      .client
      .execute_query(
        format!(
          "SELECT {MEMBERSHIP_COLUMNS} FROM memberships
           WHERE team_slug = ?1
           ORDER BY start_date, person_user_name"
        ),
        vec![Value::Text(team_slug.to_owned())],
        RawMembership::from_row,
      )
      .await
      .map_err(|e| e.within(context()))?;
    raws
      .into_iter()
      .map(RawMembership::into_membership)
      .collect::<Result<_>>()
      .map_err(|e| e.within(context()))
  }
}
