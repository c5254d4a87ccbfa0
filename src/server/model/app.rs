use sea_orm::DatabaseConnection;

use crate::server::{pokeapi::PokeApiClient, util::jwt::JwtKeys};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub pokeapi: PokeApiClient,
    pub jwt: JwtKeys,
}
