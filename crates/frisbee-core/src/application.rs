//! Application services: workflows that combine several domain services.

use crate::{
  ServiceError,
  person::Person,
  service,
  store::{MembershipStore, PersonStore},
};

/// Role name carried by a team's on-field spirit captains.
pub const GAME_CAPTAIN_ROLE: &str = "Game Captain";

/// The people holding the game captain role on `team_slug`.
///
/// A captain whose person record is missing is logged and skipped.
pub async fn get_team_game_captains<S>(
  store: &S,
  team_slug: &str,
) -> Result<Vec<Person>, ServiceError>
where
  S: MembershipStore + PersonStore,
{
  let memberships = service::get_team_memberships_by_role(
    store,
    team_slug,
    GAME_CAPTAIN_ROLE,
  )
  .await
  .map_err(|e| e.within("failed to list game captains through domain service"))?;

  let mut captains = Vec::with_capacity(memberships.len());
  for membership in memberships {
    let user_name = membership.person_user_name;
    let person = service::get_person_by_user_name(store, &user_name)
      .await
      .map_err(|e| {
        e.within(format!(
          "failed to retrieve person '{user_name}' through domain service"
        ))
      })?;

    match person {
      Some(person) => captains.push(person),
      None => tracing::warn!(
        team_slug,
        user_name = %user_name,
        "game captain membership points at a missing person"
      ),
    }
  }

  Ok(captains)
}
