//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{TimeZone, Utc};
use frisbee_core::{
  membership::Membership,
  person::{Person, PersonAttribute},
  store::{
    MembershipStore, PersonStore, Store, StoreError, StoreErrorKind, TeamStore,
  },
  team::{Team, TeamAttribute},
};

use rusqlite::types::Value;

use crate::{
  Error, QueryResult, SCHEMA_VERSION, SqliteStore, Violation, client::Client,
};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn alpha() -> Team {
  Team::new("t1", "Alpha")
    .with_description("d1")
    .with_origin_country("BRA")
    .with_created_by("admin")
}

fn doug() -> Person {
  Person::new("notdougz")
    .with_name("Douglas Olvieira")
    .with_email("doug@gmail.com")
    .with_phone_number("(11) 98765-4321")
    .with_wfdf_number("12")
    .with_origin_country("Brazil")
    .with_created_by("admin")
}

// ─── Housekeeping ────────────────────────────────────────────────────────────

#[tokio::test]
async fn schema_version_is_recorded() {
  let s = store().await;
  assert_eq!(s.schema_version().await.unwrap(), SCHEMA_VERSION);
  s.ping().await.unwrap();
}

// ─── Teams ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_team_returns_the_stored_row() {
  let s = store().await;

  let created = s.create_team(&alpha()).await.unwrap();
  assert_eq!(created.slug, "t1");
  assert_eq!(created.name, "Alpha");
  assert_eq!(created.description, "d1");
  assert_eq!(created.updated_by, "admin");
  assert_eq!(created.created_at, created.updated_at);

  let fetched = s.get_team_by_name("Alpha").await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn get_team_missing_returns_none() {
  let s = store().await;
  assert!(s.get_team_by_name("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn get_all_teams_is_ordered_by_name() {
  let s = store().await;
  s.create_team(&Team::new("z", "Zulu")).await.unwrap();
  s.create_team(&alpha()).await.unwrap();

  let names: Vec<String> = s
    .get_all_teams()
    .await
    .unwrap()
    .into_iter()
    .map(|t| t.name)
    .collect();
  assert_eq!(names, ["Alpha", "Zulu"]);
}

#[tokio::test]
async fn duplicate_team_name_is_already_exists() {
  let s = store().await;
  s.create_team(&alpha()).await.unwrap();

  let err = s
    .create_team(&Team::new("t2", "Alpha"))
    .await
    .unwrap_err();
  assert_eq!(err.kind(), StoreErrorKind::AlreadyExists);
  assert_eq!(err.violation(), Some(Violation::Unique));
  assert!(
    err.to_string().starts_with("failed to create team: unique constraint"),
    "{err}"
  );
}

#[tokio::test]
async fn duplicate_team_slug_is_already_exists() {
  let s = store().await;
  s.create_team(&alpha()).await.unwrap();

  let err = s.create_team(&Team::new("t1", "Beta")).await.unwrap_err();
  assert_eq!(err.kind(), StoreErrorKind::AlreadyExists);
  assert_eq!(err.violation(), Some(Violation::PrimaryKey));
}

#[tokio::test]
async fn update_touches_only_named_columns() {
  let s = store().await;
  let created = s.create_team(&alpha()).await.unwrap();

  // Every field differs; only the description may be written.
  let draft = Team::new("ignored", "Alpha")
    .with_description("d2")
    .with_origin_country("ARG")
    .with_updated_by("someone");

  let updated = s
    .update_team("Alpha", &draft, &[TeamAttribute::Description])
    .await
    .unwrap()
    .expect("team exists");

  assert_eq!(updated.description, "d2");
  assert_eq!(updated.origin_country, "BRA");
  assert_eq!(updated.updated_by, "admin");
  assert_eq!(updated.slug, "t1");
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn consecutive_updates_strictly_advance_updated_at() {
  let s = store().await;
  s.create_team(&alpha()).await.unwrap();
  let draft = alpha().with_updated_by("editor");

  let mut last = s.get_team_by_name("Alpha").await.unwrap().unwrap().updated_at;
  for _ in 0..5 {
    let next = s
      .update_team("Alpha", &draft, &[TeamAttribute::UpdatedBy])
      .await
      .unwrap()
      .unwrap()
      .updated_at;
    assert!(next > last, "{next} <= {last}");
    last = next;
  }
}

#[tokio::test]
async fn update_missing_team_returns_none() {
  let s = store().await;
  let result = s
    .update_team("ghost", &alpha(), &[TeamAttribute::Description])
    .await
    .unwrap();
  assert!(result.is_none());
}

// ─── People ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_person() {
  let s = store().await;

  let created = s.create_person(&doug()).await.unwrap();
  assert_eq!(created.wfdf_number, "12");
  assert_eq!(created.created_at, created.updated_at);

  let fetched = s.get_person_by_user_name("notdougz").await.unwrap();
  assert_eq!(fetched, Some(created));
  assert!(s.get_person_by_user_name("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_user_name_is_already_exists() {
  let s = store().await;
  s.create_person(&doug()).await.unwrap();

  let err = s.create_person(&doug()).await.unwrap_err();
  assert_eq!(err.kind(), StoreErrorKind::AlreadyExists);
  assert_eq!(err.violation(), Some(Violation::PrimaryKey));
  assert!(matches!(err, Error::Context { .. }));
}

#[tokio::test]
async fn update_person_writes_selected_fields() {
  let s = store().await;
  s.create_person(&doug()).await.unwrap();

  let draft = doug()
    .with_email("douglas@example.com")
    .with_name("Doug")
    .with_updated_by("editor");
  let updated = s
    .update_person(
      "notdougz",
      &draft,
      &[PersonAttribute::Email, PersonAttribute::UpdatedBy],
    )
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.email, "douglas@example.com");
  assert_eq!(updated.updated_by, "editor");
  assert_eq!(updated.name, "Douglas Olvieira");

  let all = s.get_all_people().await.unwrap();
  assert_eq!(all, vec![updated]);
}

// ─── Memberships ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn memberships_are_scoped_to_the_team() {
  let s = store().await;
  s.create_team(&alpha()).await.unwrap();
  s.create_team(&Team::new("t2", "Beta")).await.unwrap();
  s.create_person(&doug()).await.unwrap();

  let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
  s.add_membership(
    &Membership::new("t1", "notdougz", "Game Captain").with_start_date(start),
  )
  .await
  .unwrap();
  s.add_membership(&Membership::new("t2", "notdougz", "Player"))
    .await
    .unwrap();

  let memberships = s.get_memberships_by_team_slug("t1").await.unwrap();
  assert_eq!(memberships.len(), 1);
  assert_eq!(memberships[0].role, "Game Captain");
  assert_eq!(memberships[0].start_date, start);
  assert!(memberships[0].end_date.is_none());

  assert!(s.get_memberships_by_team_slug("nope").await.unwrap().is_empty());
}

#[tokio::test]
async fn membership_to_unknown_team_is_a_foreign_key_violation() {
  let s = store().await;
  s.create_person(&doug()).await.unwrap();

  let err = s
    .add_membership(&Membership::new("ghost", "notdougz", "Player"))
    .await
    .unwrap_err();
  assert_eq!(err.violation(), Some(Violation::ForeignKey));
  assert_eq!(err.kind(), StoreErrorKind::Other);
  assert!(
    err
      .to_string()
      .starts_with("failed to add membership of 'notdougz' to team 'ghost': "),
    "{err}"
  );
}

#[tokio::test]
async fn closed_membership_keeps_its_end_date() {
  let s = store().await;
  s.create_team(&alpha()).await.unwrap();
  s.create_person(&doug()).await.unwrap();

  let start = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
  let end = Utc.with_ymd_and_hms(2023, 11, 30, 18, 0, 0).unwrap();
  s.add_membership(
    &Membership::new("t1", "notdougz", "Player")
      .with_start_date(start)
      .with_end_date(end),
  )
  .await
  .unwrap();

  let memberships = s.get_memberships_by_team_slug("t1").await.unwrap();
  assert_eq!(memberships.len(), 1);
  assert_eq!(memberships[0].start_date, start);
  assert_eq!(memberships[0].end_date, Some(end));
}

// ─── Client ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn query_result_counts_written_and_returned_rows() {
  let client = Client::open_in_memory().await.unwrap();
  client
    .execute_batch("CREATE TABLE t (v TEXT NOT NULL);")
    .await
    .unwrap();

  let (rows, result) = client
    .execute_query(
      "INSERT INTO t (v) VALUES (?1) RETURNING v",
      vec![Value::Text("a".into())],
      |row| row.get::<_, String>(0),
    )
    .await
    .unwrap();
  assert_eq!(rows, ["a"]);
  assert_eq!(
    result,
    QueryResult {
      rows_affected: 1,
      rows_returned: 1,
    }
  );

  let (_, result) = client
    .execute_query("SELECT v FROM t", Vec::new(), |row| {
      row.get::<_, String>(0)
    })
    .await
    .unwrap();
  assert_eq!(
    result,
    QueryResult {
      rows_affected: 0,
      rows_returned: 1,
    }
  );
}
