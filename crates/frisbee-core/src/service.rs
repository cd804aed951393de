//! Domain services.
//!
//! Thin, stateless wrappers over the store ports. Each one calls the store and
//! attaches the operation and key to any failure, nothing more. Absence is a
//! value (`Ok(None)`), never an error.

use crate::{
  ServiceError,
  membership::Membership,
  person::{Person, PersonAttribute},
  store::{MembershipStore, PersonStore, TeamStore},
  team::{Team, TeamAttribute},
};

pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

// ─── Teams ───────────────────────────────────────────────────────────────────

pub async fn get_all_teams<S: TeamStore>(store: &S) -> Result<Vec<Team>> {
  store.get_all_teams().await.map_err(|e| {
    ServiceError::from_store("failed to fetch all teams from repository", e)
  })
}

pub async fn get_team_by_name<S: TeamStore>(
  store: &S,
  name: &str,
) -> Result<Option<Team>> {
  store.get_team_by_name(name).await.map_err(|e| {
    ServiceError::from_store(
      format!("failed to fetch team by name '{name}' from repository"),
      e,
    )
  })
}

pub async fn create_team<S: TeamStore>(store: &S, team: &Team) -> Result<Team> {
  store.create_team(team).await.map_err(|e| {
    ServiceError::from_store(
      format!("failed to create team with name '{}' in repository", team.name),
      e,
    )
  })
}

pub async fn update_team<S: TeamStore>(
  store: &S,
  name: &str,
  team: &Team,
  attributes: &[TeamAttribute],
) -> Result<Option<Team>> {
  store.update_team(name, team, attributes).await.map_err(|e| {
    ServiceError::from_store(
      format!("failed to update team with name '{name}' in repository"),
      e,
    )
  })
}

// ─── People ──────────────────────────────────────────────────────────────────

pub async fn get_all_people<S: PersonStore>(store: &S) -> Result<Vec<Person>> {
  store.get_all_people().await.map_err(|e| {
    ServiceError::from_store("failed to fetch all people from repository", e)
  })
}

pub async fn get_person_by_user_name<S: PersonStore>(
  store: &S,
  user_name: &str,
) -> Result<Option<Person>> {
  store.get_person_by_user_name(user_name).await.map_err(|e| {
    ServiceError::from_store(
      format!("failed to fetch person '{user_name}' from repository"),
      e,
    )
  })
}

pub async fn create_person<S: PersonStore>(
  store: &S,
  person: &Person,
) -> Result<Person> {
  store.create_person(person).await.map_err(|e| {
    ServiceError::from_store(
      format!(
        "failed to create person with user name '{}' in repository",
        person.user_name
      ),
      e,
    )
  })
}

pub async fn update_person<S: PersonStore>(
  store: &S,
  user_name: &str,
  person: &Person,
  attributes: &[PersonAttribute],
) -> Result<Option<Person>> {
  store
    .update_person(user_name, person, attributes)
    .await
    .map_err(|e| {
      ServiceError::from_store(
        format!(
          "failed to update person with user name '{user_name}' in repository"
        ),
        e,
      )
    })
}

// ─── Memberships ─────────────────────────────────────────────────────────────

/// The memberships of `team_slug` whose role is exactly `role`.
pub async fn get_team_memberships_by_role<S: MembershipStore>(
  store: &S,
  team_slug: &str,
  role: &str,
) -> Result<Vec<Membership>> {
  let memberships =
    store
      .get_memberships_by_team_slug(team_slug)
      .await
      .map_err(|e| {
        ServiceError::from_store(
          format!(
            "failed to fetch all memberships of team '{team_slug}' from \
             repository"
          ),
          e,
        )
      })?;

  Ok(
    memberships
      .into_iter()
      .filter(|m| m.has_role(role))
      .collect(),
  )
}
