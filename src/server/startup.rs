use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, error::Error, pokeapi::PokeApiClient, util::jwt::JwtKeys,
};

/// Build the PokeAPI client identifying the deployment through its user agent
pub fn build_pokeapi_client(config: &Config) -> Result<PokeApiClient, Error> {
    PokeApiClient::new(&config.pokeapi_url, &config.user_agent)
}

pub fn build_jwt_keys(config: &Config) -> JwtKeys {
    JwtKeys::new(
        &config.jwt_secret,
        config.access_token_minutes,
        config.refresh_token_days,
    )
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
