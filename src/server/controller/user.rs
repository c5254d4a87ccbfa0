use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{RegisterUserDto, UserDto},
    },
    server::{
        controller::util::auth_user::AuthUser, error::Error, model::app::AppState,
        service::auth::AuthService,
    },
};

pub static USER_TAG: &str = "usuarios";

/// Registers a new user
#[utoipa::path(
    post,
    path = "/api/usuarios/",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "A required field is blank", body = ErrorDto),
        (status = 409, description = "Login or email already taken", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(user): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AuthService::new(&state.db, &state.jwt);

    let user = service.register(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// The user the bearer token belongs to
#[utoipa::path(
    get,
    path = "/api/usuarios/me/",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let service = AuthService::new(&state.db, &state.jwt);

    let user = service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}
