//! Helpers for building `AppState` and reading responses in controller tests

use axum::{body::to_bytes, response::Response};
use pokedex::{
    model::auth::TokenKind,
    server::{model::app::AppState, pokeapi::PokeApiClient, util::jwt::JwtKeys},
};
use pokedex_test_utils::prelude::*;
use serde::de::DeserializeOwned;

pub fn test_jwt_keys() -> JwtKeys {
    JwtKeys::new(TEST_JWT_SECRET, 30, 1)
}

/// Extension trait for TestContext to create AppState pointed at the mock PokeAPI server
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let pokeapi = PokeApiClient::new(&self.pokeapi_url(), TEST_USER_AGENT)
            .expect("Failed to build PokeAPI client");

        AppState {
            db: self.db.clone(),
            pokeapi,
            jwt: test_jwt_keys(),
        }
    }
}

/// `Authorization` header value carrying a valid access token for `user_id`
pub fn bearer(user_id: i32) -> String {
    let token = test_jwt_keys()
        .issue(user_id, TokenKind::Access)
        .expect("Failed to issue token");

    format!("Bearer {}", token)
}

pub async fn response_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
