//! HTTP controller endpoints for the Pokedex web API.
//!
//! Axum handlers for the catalog proxy, per-user records, tokens and registration. Handlers
//! extract inputs, delegate to a service and pick the response status. Each one carries a
//! `utoipa::path` annotation used to build the OpenAPI document.

pub mod auth;
pub mod pokemon;
pub mod user;
pub mod user_pokemon;
pub mod util;
