use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PokeApiError {
    #[error("PokeAPI has no resource at {0:?}")]
    NotFound(String),
    #[error("PokeAPI returned status {status} for {path:?}")]
    UpstreamStatus { path: String, status: u16 },
    #[error("Failed to reach PokeAPI: {0}")]
    Request(#[from] reqwest::Error),
}

impl IntoResponse for PokeApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                (StatusCode::NOT_FOUND, Json(ErrorDto::new("Pokémon not found"))).into_response()
            }
            err => {
                tracing::error!("{}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new("Failed to fetch data from PokeAPI")),
                )
                    .into_response()
            }
        }
    }
}
