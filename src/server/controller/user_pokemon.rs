use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user_pokemon::{
            CreateUserPokemonDto, UpdateUserPokemonDto, UserPokemonDto, UserPokemonQuery,
        },
    },
    server::{
        controller::util::auth_user::AuthUser,
        error::Error,
        model::app::AppState,
        service::user_pokemon::{UpdateOutcome, UserPokemonService},
    },
};

pub static USER_POKEMON_TAG: &str = "pokemon-usuario";

/// The caller's records, optionally filtered
#[utoipa::path(
    get,
    path = "/api/pokemon-usuario/",
    tag = USER_POKEMON_TAG,
    params(UserPokemonQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Matching records ordered by ID", body = Vec<UserPokemonDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_pokemon(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<UserPokemonQuery>,
) -> Result<impl IntoResponse, Error> {
    let service = UserPokemonService::new(&state.db);

    let records = service.list(user_id, &query).await?;

    Ok((StatusCode::OK, Json(records)))
}

/// One of the caller's records
#[utoipa::path(
    get,
    path = "/api/pokemon-usuario/{id}/",
    tag = USER_POKEMON_TAG,
    params(("id" = i32, Path, description = "Record ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The record", body = UserPokemonDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No such record for the caller", body = ErrorDto)
    ),
)]
pub async fn get_user_pokemon(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = UserPokemonService::new(&state.db);

    let record = service.get(user_id, id).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Saves a Pokémon as favorite and/or team member
#[utoipa::path(
    post,
    path = "/api/pokemon-usuario/",
    tag = USER_POKEMON_TAG,
    request_body = CreateUserPokemonDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Record created", body = UserPokemonDto),
        (status = 400, description = "Neither flag set", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Battle team is full", body = ErrorDto),
        (status = 409, description = "A record for this Pokémon already exists", body = ErrorDto)
    ),
)]
pub async fn create_user_pokemon(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(record): Json<CreateUserPokemonDto>,
) -> Result<impl IntoResponse, Error> {
    let service = UserPokemonService::new(&state.db);

    let created = service.create(user_id, record).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially updates a record, deleting it when both flags end up false
#[utoipa::path(
    patch,
    path = "/api/pokemon-usuario/{id}/",
    tag = USER_POKEMON_TAG,
    params(("id" = i32, Path, description = "Record ID")),
    request_body = UpdateUserPokemonDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Record updated", body = UserPokemonDto),
        (status = 204, description = "Both flags cleared, record deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Battle team is full", body = ErrorDto),
        (status = 404, description = "No such record for the caller", body = ErrorDto)
    ),
)]
pub async fn update_user_pokemon(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateUserPokemonDto>,
) -> Result<impl IntoResponse, Error> {
    let service = UserPokemonService::new(&state.db);

    match service.update(user_id, id, changes).await? {
        UpdateOutcome::Updated(record) => Ok((StatusCode::OK, Json(record)).into_response()),
        UpdateOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Deletes one of the caller's records
#[utoipa::path(
    delete,
    path = "/api/pokemon-usuario/{id}/",
    tag = USER_POKEMON_TAG,
    params(("id" = i32, Path, description = "Record ID")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No such record for the caller", body = ErrorDto)
    ),
)]
pub async fn delete_user_pokemon(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = UserPokemonService::new(&state.db);

    service.delete(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
