//! In-memory store used by the service tests.

use std::sync::Mutex;

use thiserror::Error;

use crate::{
  membership::Membership,
  person::{Person, PersonAttribute},
  store::{
    MembershipStore, PersonStore, Store, StoreError, StoreErrorKind, TeamStore,
  },
  team::{Team, TeamAttribute},
};

#[derive(Debug, Error)]
#[error("fake store: {message}")]
pub(crate) struct FakeError {
  message: &'static str,
  kind:    StoreErrorKind,
}

impl StoreError for FakeError {
  fn kind(&self) -> StoreErrorKind { self.kind }
}

const UNAVAILABLE: FakeError = FakeError {
  message: "unavailable",
  kind:    StoreErrorKind::Other,
};

/// Keyed by name / user name. Updates replace the whole record.
#[derive(Default)]
pub(crate) struct FakeStore {
  teams:       Mutex<Vec<Team>>,
  people:      Mutex<Vec<Person>>,
  memberships: Vec<Membership>,
  failing:     bool,
}

impl FakeStore {
  pub(crate) fn failing() -> Self {
    Self {
      failing: true,
      ..Self::default()
    }
  }

  pub(crate) fn with_people(self, people: Vec<Person>) -> Self {
    Self {
      people: Mutex::new(people),
      ..self
    }
  }

  pub(crate) fn with_memberships(self, memberships: Vec<Membership>) -> Self {
    Self {
      memberships,
      ..self
    }
  }

  fn check(&self) -> Result<(), FakeError> {
    if self.failing { Err(UNAVAILABLE) } else { Ok(()) }
  }
}

impl Store for FakeStore {
  type Error = FakeError;

  async fn ping(&self) -> Result<(), FakeError> { self.check() }
}

impl TeamStore for FakeStore {
  async fn get_all_teams(&self) -> Result<Vec<Team>, FakeError> {
    self.check()?;
    Ok(self.teams.lock().unwrap().clone())
  }

  async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>, FakeError> {
    self.check()?;
    let teams = self.teams.lock().unwrap();
    Ok(teams.iter().find(|t| t.name == name).cloned())
  }

  async fn create_team(&self, team: &Team) -> Result<Team, FakeError> {
    self.check()?;
    let mut teams = self.teams.lock().unwrap();
    if teams.iter().any(|t| t.name == team.name || t.slug == team.slug) {
      return Err(FakeError {
        message: "duplicate team",
        kind:    StoreErrorKind::AlreadyExists,
      });
    }
    teams.push(team.clone());
    Ok(team.clone())
  }

  async fn update_team(
    &self,
    name: &str,
    team: &Team,
    _attributes: &[TeamAttribute],
  ) -> Result<Option<Team>, FakeError> {
    self.check()?;
    let mut teams = self.teams.lock().unwrap();
    Ok(teams.iter_mut().find(|t| t.name == name).map(|slot| {
      *slot = team.clone();
      team.clone()
    }))
  }
}

impl PersonStore for FakeStore {
  async fn get_all_people(&self) -> Result<Vec<Person>, FakeError> {
    self.check()?;
    Ok(self.people.lock().unwrap().clone())
  }

  async fn get_person_by_user_name(
    &self,
    user_name: &str,
  ) -> Result<Option<Person>, FakeError> {
    self.check()?;
    let people = self.people.lock().unwrap();
    Ok(people.iter().find(|p| p.user_name == user_name).cloned())
  }

  async fn create_person(&self, person: &Person) -> Result<Person, FakeError> {
    self.check()?;
    let mut people = self.people.lock().unwrap();
    if people.iter().any(|p| p.user_name == person.user_name) {
      return Err(FakeError {
        message: "duplicate person",
        kind:    StoreErrorKind::AlreadyExists,
      });
    }
    people.push(person.clone());
    Ok(person.clone())
  }

  async fn update_person(
    &self,
    user_name: &str,
    person: &Person,
    _attributes: &[PersonAttribute],
  ) -> Result<Option<Person>, FakeError> {
    self.check()?;
    let mut people = self.people.lock().unwrap();
    Ok(people.iter_mut().find(|p| p.user_name == user_name).map(|slot| {
      *slot = person.clone();
      person.clone()
    }))
  }
}

impl MembershipStore for FakeStore {
  async fn get_memberships_by_team_slug(
    &self,
    team_slug: &str,
  ) -> Result<Vec<Membership>, FakeError> {
    self.check()?;
    Ok(
      self
        .memberships
        .iter()
        .filter(|m| m.team_slug == team_slug)
        .cloned()
        .collect(),
    )
  }
}
