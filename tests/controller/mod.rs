//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, except for the router tests which go
//! through the full axum stack to exercise the bearer token extractor.

mod auth;
mod pokemon;
mod router;
mod user;
mod user_pokemon;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokedex_test_utils::prelude::*;

use crate::util::{response_json, TestContextExt};
