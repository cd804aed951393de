//! Repository ports implemented by storage backends.
//!
//! Higher layers (`frisbee-api`, the domain services) depend on these
//! abstractions, never on a concrete backend.

use std::future::Future;

use crate::{
  membership::Membership,
  person::{Person, PersonAttribute},
  team::{Team, TeamAttribute},
};

// ─── Error classification ────────────────────────────────────────────────────

/// The outcomes of a failed store call that callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
  /// A uniqueness constraint rejected the write.
  AlreadyExists,
  Other,
}

/// Backend errors must say what kind of failure they are, so nothing above
/// the store has to inspect error messages.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> StoreErrorKind;
}

// ─── Traits ──────────────────────────────────────────────────────────────────

/// Shared base of every store port.
///
/// All methods return `Send` futures so the traits can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait Store: Send + Sync {
  type Error: StoreError;

  /// Cheap round trip to the backend, used by health checks.
  fn ping(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

pub trait TeamStore: Store {
  fn get_all_teams(
    &self,
  ) -> impl Future<Output = Result<Vec<Team>, Self::Error>> + Send + '_;

  /// Returns `None` when no team has this name.
  fn get_team_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Team>, Self::Error>> + Send + 'a;

  /// Insert `team` and return the stored row, timestamps filled in by the
  /// store. A duplicate slug or name fails with
  /// [`StoreErrorKind::AlreadyExists`].
  fn create_team<'a>(
    &'a self,
    team: &'a Team,
  ) -> impl Future<Output = Result<Team, Self::Error>> + Send + 'a;

  /// Write exactly the columns named by `attributes`, taking their values
  /// from `team`, on the team called `name`. `updated_at` is always
  /// advanced.
  ///
  /// Returns `None` when no team has this name.
  fn update_team<'a>(
    &'a self,
    name: &'a str,
    team: &'a Team,
    attributes: &'a [TeamAttribute],
  ) -> impl Future<Output = Result<Option<Team>, Self::Error>> + Send + 'a;
}

pub trait PersonStore: Store {
  fn get_all_people(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Returns `None` when no person has this user name.
  fn get_person_by_user_name<'a>(
    &'a self,
    user_name: &'a str,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + 'a;

  fn create_person<'a>(
    &'a self,
    person: &'a Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + 'a;

  /// Partial update keyed by `user_name`; see [`TeamStore::update_team`].
  fn update_person<'a>(
    &'a self,
    user_name: &'a str,
    person: &'a Person,
    attributes: &'a [PersonAttribute],
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + 'a;
}

pub trait MembershipStore: Store {
  /// All memberships of a team; empty when the team has none or does not
  /// exist.
  fn get_memberships_by_team_slug<'a>(
    &'a self,
    team_slug: &'a str,
  ) -> impl Future<Output = Result<Vec<Membership>, Self::Error>> + Send + 'a;
}
