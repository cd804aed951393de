//! Sample data for local development.
//!
//! Re-running is harmless: records that already exist are skipped.

use chrono::{TimeZone, Utc};
use frisbee_core::{
  application::GAME_CAPTAIN_ROLE,
  membership::Membership,
  person::Person,
  service,
  store::{StoreError, StoreErrorKind},
  team::Team,
};
use frisbee_store_sqlite::SqliteStore;

const SEEDER: &str = "admin";

/// How many records a seeding run wrote and skipped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
  pub created: usize,
  pub skipped: usize,
}

fn teams() -> Vec<Team> {
  [
    (
      "ultimate-warriors",
      "Ultimate Warriors",
      "A competitive ultimate frisbee team from California",
      "USA",
    ),
    (
      "disc-dynamos",
      "Disc Dynamos",
      "Professional ultimate frisbee team from New York",
      "USA",
    ),
    (
      "flying-circus",
      "Flying Circus",
      "European championship ultimate frisbee team",
      "Germany",
    ),
  ]
  .into_iter()
  .map(|(slug, name, description, country)| {
    Team::new(slug, name)
      .with_description(description)
      .with_origin_country(country)
      .with_created_by(SEEDER)
  })
  .collect()
}

fn people() -> Vec<Person> {
  [
    ("notdougz", "Douglas Olvieira", "doug@gmail.com", "12"),
    ("allanbm100", "Allan Moreira", "allan@gmail.com", "34"),
    ("Iolivieri", "Isabella Olivieri", "bella@gmail.com", "56"),
  ]
  .into_iter()
  .map(|(user_name, name, email, wfdf_number)| {
    Person::new(user_name)
      .with_name(name)
      .with_email(email)
      .with_phone_number("(11) 98765-4321")
      .with_wfdf_number(wfdf_number)
      .with_origin_country("Brazil")
      .with_created_by(SEEDER)
  })
  .collect()
}

fn memberships() -> Vec<Membership> {
  let season_start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
  [
    ("flying-circus", "notdougz", GAME_CAPTAIN_ROLE),
    ("flying-circus", "allanbm100", "Player"),
    ("disc-dynamos", "Iolivieri", GAME_CAPTAIN_ROLE),
  ]
  .into_iter()
  .map(|(team_slug, user_name, role)| {
    let membership =
      Membership::new(team_slug, user_name, role).with_created_by(SEEDER);
    match season_start {
      Some(start) => membership.with_start_date(start),
      None => membership,
    }
  })
  .collect()
}

/// Insert the sample teams, people and memberships into `store`.
pub async fn run(store: &SqliteStore) -> anyhow::Result<SeedReport> {
  let mut report = SeedReport::default();

  for team in teams() {
    if service::get_team_by_name(store, &team.name).await?.is_some() {
      tracing::info!(name = %team.name, "team already exists, skipping");
      report.skipped += 1;
      continue;
    }
    match service::create_team(store, &team).await {
      Ok(_) => report.created += 1,
      Err(e) if e.is_already_exists() => report.skipped += 1,
      Err(e) => return Err(e.into()),
    }
  }

  for person in people() {
    if service::get_person_by_user_name(store, &person.user_name)
      .await?
      .is_some()
    {
      tracing::info!(
        user_name = %person.user_name,
        "person already exists, skipping"
      );
      report.skipped += 1;
      continue;
    }
    service::create_person(store, &person).await?;
    report.created += 1;
  }

  for membership in memberships() {
    match store.add_membership(&membership).await {
      Ok(()) => report.created += 1,
      Err(e) if e.kind() == StoreErrorKind::AlreadyExists => {
        report.skipped += 1;
      }
      Err(e) => return Err(e.into()),
    }
  }

  Ok(report)
}
