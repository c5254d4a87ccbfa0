#![allow(non_snake_case)]

mod client;

use pokedex::model;

#[cfg(feature = "server")]
use pokedex::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let pokeapi = or_exit("PokeAPI client error", startup::build_pokeapi_client(&config));
        let jwt = startup::build_jwt_keys(&config);
        let db = or_exit("Database error", startup::connect_to_database(&config).await);

        tracing::info!(pokeapi_url = %config.pokeapi_url, "Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(AppState { db, pokeapi, jwt });
        router = router.merge(server_routes);

        Ok(router)
    })
}

#[cfg(feature = "server")]
fn or_exit<T>(context: &str, result: Result<T, server::error::Error>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}: {}", context, e);
            std::process::exit(1);
        }
    }
}
