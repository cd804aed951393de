//! Handlers for `/v1/people` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/v1/people/` | |
//! | `POST` | `/v1/people/` | 201; 409 if the user name is taken |
//! | `GET`  | `/v1/people/{user_name}/` | 404 if not found |
//! | `PUT`  | `/v1/people/{user_name}/` | Partial update; 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use frisbee_core::{service, store::PersonStore};
use tracing::Instrument as _;

use crate::{
  AppState,
  error::ApiError,
  payload::{
    JsonBody,
    person::{self, PersonPayload},
  },
};

/// `GET /v1/people/`
pub async fn list<S: PersonStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<PersonPayload>>, ApiError> {
  let people = service::get_all_people(state.store.as_ref())
    .instrument(state.span.clone())
    .await
    .map_err(|e| {
      state.internal(format!("failed to get all people from domain service: {e}"))
    })?;
  Ok(Json(people.into_iter().map(PersonPayload::from).collect()))
}

/// `GET /v1/people/{user_name}/`
pub async fn get_one<S: PersonStore>(
  State(state): State<AppState<S>>,
  Path(user_name): Path<String>,
) -> Result<Json<PersonPayload>, ApiError> {
  let store = state.store.as_ref();
  let person = service::get_person_by_user_name(store, &user_name)
    .instrument(state.span.clone())
    .await
    .map_err(|e| {
      state.internal(format!(
        "failed to search person '{user_name}' from domain service: {e}"
      ))
    })?
    .ok_or_else(|| {
      ApiError::NotFound(format!(
        "no person with user name '{user_name}' was found in the repository"
      ))
    })?;
  Ok(Json(person.into()))
}

/// `POST /v1/people/`
pub async fn create<S: PersonStore>(
  State(state): State<AppState<S>>,
  JsonBody(body): JsonBody<PersonPayload>,
) -> Result<(StatusCode, Json<PersonPayload>), ApiError> {
  let draft = person::map_create(body)?;

  match service::create_person(state.store.as_ref(), &draft)
    .instrument(state.span.clone())
    .await
  {
    Ok(created) => {
      tracing::info!(
        parent: &state.span,
        user_name = %created.user_name,
        "person created"
      );
      Ok((StatusCode::CREATED, Json(created.into())))
    }
    Err(e) if e.is_already_exists() => Err(ApiError::Conflict(format!(
      "person with user name '{}' already exists",
      draft.user_name
    ))),
    Err(e) => Err(state.internal(format!(
      "failed to create person with user name '{}' in domain service: {e}",
      draft.user_name
    ))),
  }
}

/// `PUT /v1/people/{user_name}/`
pub async fn update<S: PersonStore>(
  State(state): State<AppState<S>>,
  Path(user_name): Path<String>,
  JsonBody(body): JsonBody<PersonPayload>,
) -> Result<Json<PersonPayload>, ApiError> {
  let (draft, attributes) = person::map_update(body, &user_name)?;

  let updated = service::update_person(
    state.store.as_ref(),
    &user_name,
    &draft,
    &attributes,
  )
  .instrument(state.span.clone())
  .await
  .map_err(|e| {
    state.internal(format!(
      "failed to update person with user name '{user_name}' in domain \
       service: {e}"
    ))
  })?
  .ok_or_else(|| {
    ApiError::NotFound(format!(
      "no person with user name '{user_name}' was found"
    ))
  })?;
  Ok(Json(updated.into()))
}
