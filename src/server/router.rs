//! HTTP routing and OpenAPI documentation.
//!
//! Every API endpoint is registered here together with its utoipa specification. The collected
//! OpenAPI document is served at `/api/docs/openapi.json` with Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// Builds the API router with Swagger UI.
///
/// # Registered Endpoints
/// - `GET /api/pokemon/` and `GET /api/pokemon/{id}/` - Catalog listing and detail
/// - `GET /api/pokemon/types`, `GET /api/pokemon/generations` - Selector options
/// - `GET /api/pokemon/filter-type`, `/filter-generation`, `/filter-combined` - Filters
/// - `GET /api/pokemon/search-name` - Lookup by name
/// - `/api/pokemon-usuario/` - The caller's favorites and battle team (bearer token)
/// - `POST /api/token/`, `POST /api/token/refresh/` - Token issuance
/// - `POST /api/usuarios/`, `GET /api/usuarios/me/` - Registration and current user
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Pokedex", description = "Pokedex API"),
        modifiers(&BearerAuth),
        tags(
            (name = controller::pokemon::POKEMON_TAG, description = "Pokémon catalog backed by PokeAPI"),
            (name = controller::user_pokemon::USER_POKEMON_TAG, description = "Favorites and battle team"),
            (name = controller::auth::AUTH_TAG, description = "JWT issuance"),
            (name = controller::user::USER_TAG, description = "User accounts"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::pokemon::list_pokemon))
        .routes(routes!(controller::pokemon::get_pokemon))
        .routes(routes!(controller::pokemon::get_types))
        .routes(routes!(controller::pokemon::get_generations))
        .routes(routes!(controller::pokemon::filter_by_type))
        .routes(routes!(controller::pokemon::filter_by_generation))
        .routes(routes!(controller::pokemon::filter_combined))
        .routes(routes!(controller::pokemon::search_by_name))
        .routes(routes!(
            controller::user_pokemon::list_user_pokemon,
            controller::user_pokemon::create_user_pokemon
        ))
        .routes(routes!(
            controller::user_pokemon::get_user_pokemon,
            controller::user_pokemon::update_user_pokemon,
            controller::user_pokemon::delete_user_pokemon
        ))
        .routes(routes!(controller::auth::obtain_token))
        .routes(routes!(controller::auth::refresh_token))
        .routes(routes!(controller::user::register_user))
        .routes(routes!(controller::user::get_current_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
