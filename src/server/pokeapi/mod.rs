//! HTTP client for the public PokeAPI.

pub mod model;

use dioxus_logger::tracing;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::server::{
    error::{pokeapi::PokeApiError, Error},
    pokeapi::model::{ApiGeneration, ApiPokemon, ApiResourceList, ApiType},
};

/// Largest page size PokeAPI is asked for in one request
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client against `base_url`, e.g. `https://pokeapi.co/api/v2`.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PokeApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "Fetching from PokeAPI");

        let response = self.http.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(PokeApiError::NotFound(path.to_string())),
            status if !status.is_success() => Err(PokeApiError::UpstreamStatus {
                path: path.to_string(),
                status: status.as_u16(),
            }),
            _ => Ok(response.json::<T>().await?),
        }
    }

    pub async fn list_pokemon(
        &self,
        offset: u32,
        limit: u32,
    ) -> Result<ApiResourceList, PokeApiError> {
        self.get_json(&format!("/pokemon?offset={}&limit={}", offset, limit))
            .await
    }

    /// Fetches one Pokémon by numeric ID or lowercase name.
    pub async fn get_pokemon(&self, id_or_name: &str) -> Result<ApiPokemon, PokeApiError> {
        self.get_json(&format!("/pokemon/{}", urlencoding::encode(id_or_name)))
            .await
    }

    pub async fn list_types(&self) -> Result<ApiResourceList, PokeApiError> {
        self.get_json(&format!("/type?limit={}", MAX_PAGE_LIMIT)).await
    }

    pub async fn list_generations(&self) -> Result<ApiResourceList, PokeApiError> {
        self.get_json("/generation").await
    }

    pub async fn get_type(&self, type_id: i32) -> Result<ApiType, PokeApiError> {
        self.get_json(&format!("/type/{}", type_id)).await
    }

    pub async fn get_generation(&self, generation_id: i32) -> Result<ApiGeneration, PokeApiError> {
        self.get_json(&format!("/generation/{}", generation_id))
            .await
    }
}
