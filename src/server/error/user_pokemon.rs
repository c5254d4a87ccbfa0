use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{api::ErrorDto, user_pokemon::TEAM_SIZE_LIMIT};

#[derive(Error, Debug)]
pub enum UserPokemonError {
    #[error("Record ID {record_id:?} not found for user ID {user_id:?}")]
    NotFound { user_id: i32, record_id: i32 },
    #[error("User ID {0:?} already has a full battle team")]
    TeamFull(i32),
    #[error("Refusing to store a record with both favorite and team unset")]
    NoFlagSet,
    #[error("User ID {user_id:?} already has a record for Pokémon code {code:?}")]
    DuplicateCode { user_id: i32, code: String },
}

impl IntoResponse for UserPokemonError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new("Not found"))).into_response()
            }
            Self::TeamFull(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(format!(
                    "Battle team is full, a team holds at most {} Pokémon",
                    TEAM_SIZE_LIMIT
                ))),
            )
                .into_response(),
            Self::NoFlagSet => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(
                    "A record must be marked as favorite or team member",
                )),
            )
                .into_response(),
            Self::DuplicateCode { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto::new("This Pokémon is already saved for the user")),
            )
                .into_response(),
        }
    }
}
