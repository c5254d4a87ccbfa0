use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid login or password")]
    InvalidCredentials,
    #[error("User ID {0:?} is inactive")]
    InactiveUser(i32),
    #[error("Request is missing an Authorization header")]
    MissingToken,
    #[error("Authorization header is not a Bearer or Token credential")]
    MalformedHeader,
    #[error("Token failed validation: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),
    #[error("Expected a {expected} token")]
    WrongTokenType { expected: &'static str },
    #[error("User ID {0:?} from a valid token no longer exists")]
    UserNotInDatabase(i32),
    #[error("Login {0:?} is already taken")]
    LoginTaken(String),
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidCredentials | Self::InactiveUser(_) => {
                Self::unauthorized("No active account found with the given credentials")
            }
            Self::MissingToken | Self::MalformedHeader => {
                Self::unauthorized("Authentication credentials were not provided")
            }
            Self::InvalidToken(_) | Self::WrongTokenType { .. } | Self::UserNotInDatabase(_) => {
                Self::unauthorized("Given token not valid for any token type")
            }
            Self::LoginTaken(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto::new("A user with that login already exists")),
            )
                .into_response(),
            Self::EmailTaken(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto::new("A user with that email already exists")),
            )
                .into_response(),
        }
    }
}
