use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AccessTokenDto, LoginDto, RefreshDto, TokenPairDto},
    },
    server::{error::Error, model::app::AppState, service::auth::AuthService},
};

pub static AUTH_TAG: &str = "auth";

/// Exchanges a login and password for an access and refresh token
#[utoipa::path(
    post,
    path = "/api/token/",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token pair issued", body = TokenPairDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AuthService::new(&state.db, &state.jwt);

    let tokens = service.login(credentials).await?;

    Ok((StatusCode::OK, Json(tokens)))
}

/// Exchanges a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/token/refresh/",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Access token issued", body = AccessTokenDto),
        (status = 401, description = "Invalid or non-refresh token", body = ErrorDto)
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(refresh): Json<RefreshDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AuthService::new(&state.db, &state.jwt);

    let access = service.refresh(refresh).await?;

    Ok((StatusCode::OK, Json(access)))
}
