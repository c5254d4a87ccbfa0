//! Error types for the Pokedex server.
//!
//! Domain errors (authentication, configuration, PokeAPI, user records) each carry their own
//! `IntoResponse` mapping. Library errors are folded into [`Error`] via `#[from]` and answered
//! with a generic 500 through [`InternalServerError`].

pub mod auth;
pub mod config;
pub mod pokeapi;
pub mod user_pokemon;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, pokeapi::PokeApiError,
        user_pokemon::UserPokemonError,
    },
};

/// Main error type for the Pokedex server.
///
/// Aggregates the domain-specific error types and external library errors so that services
/// and controllers can propagate everything with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, tokens, registration conflicts).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// PokeAPI lookup error (unknown Pokémon, upstream failure).
    #[error(transparent)]
    PokeApiError(#[from] PokeApiError),
    /// Per-user record error (missing record, full team, invalid flags).
    #[error(transparent)]
    UserPokemonError(#[from] UserPokemonError),
    /// Request was well formed JSON but semantically invalid.
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// Internal error indicating a bug in the server code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JWT encoding or decoding failure outside of request validation.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Password hashing failure.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// HTTP client error while building the PokeAPI client.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

/// Maps errors to HTTP responses.
///
/// # Returns
/// - Domain errors - Their own status mapping (400, 401, 403, 404, 409, 502)
/// - 400 Bad Request - For [`Error::BadRequest`]
/// - 500 Internal Server Error - For everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PokeApiError(err) => err.into_response(),
            Self::UserPokemonError(err) => err.into_response(),
            Self::BadRequest(message) => {
                tracing::debug!("Bad request: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(message))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full message is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
