use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        pokemon::{GenerationListDto, PokemonDto, PokemonListDto, PokemonPageDto, TypeListDto},
    },
    server::{error::Error, model::app::AppState, service::pokemon::PokemonService},
};

pub static POKEMON_TAG: &str = "pokemon";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Number of Pokémon to skip
    pub offset: Option<u32>,
    /// Page size, 1 to 100, defaults to 20
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterParams {
    /// Type or generation ID, `0` meaning all
    pub id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CombinedFilterParams {
    /// Generation ID, `0` meaning all
    pub gen_id: i32,
    /// Type ID, `0` meaning all
    pub type_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    pub name: String,
}

/// Paginated catalog listing
#[utoipa::path(
    get,
    path = "/api/pokemon/",
    tag = POKEMON_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "One page of the catalog", body = PokemonPageDto),
        (status = 502, description = "PokeAPI request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pokemon(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let service = PokemonService::new(&state.pokeapi);

    let page = service.list(params.offset, params.limit).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// One Pokémon with its types
#[utoipa::path(
    get,
    path = "/api/pokemon/{id}/",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokémon ID")),
    responses(
        (status = 200, description = "The Pokémon", body = PokemonDto),
        (status = 404, description = "No Pokémon with this ID", body = ErrorDto),
        (status = 502, description = "PokeAPI request failed", body = ErrorDto)
    ),
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = PokemonService::new(&state.pokeapi);

    let pokemon = service.get(id).await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

/// All Pokémon types, for the type selector
#[utoipa::path(
    get,
    path = "/api/pokemon/types",
    tag = POKEMON_TAG,
    responses(
        (status = 200, description = "All types", body = TypeListDto),
        (status = 502, description = "PokeAPI request failed", body = ErrorDto)
    ),
)]
pub async fn get_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = PokemonService::new(&state.pokeapi);

    Ok((StatusCode::OK, Json(service.types().await?)))
}

/// All generations, for the generation selector
#[utoipa::path(
    get,
    path = "/api/pokemon/generations",
    tag = POKEMON_TAG,
    responses(
        (status = 200, description = "All generations", body = GenerationListDto),
        (status = 502, description = "PokeAPI request failed", body = ErrorDto)
    ),
)]
pub async fn get_generations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = PokemonService::new(&state.pokeapi);

    Ok((StatusCode::OK, Json(service.generations().await?)))
}

/// Pokémon of one type
#[utoipa::path(
    get,
    path = "/api/pokemon/filter-type",
    tag = POKEMON_TAG,
    params(FilterParams),
    responses(
        (status = 200, description = "Pokémon of the type, sorted by ID", body = PokemonListDto),
        (status = 404, description = "Unknown type", body = ErrorDto),
        (status = 502, description = "PokeAPI request failed", body = ErrorDto)
    ),
)]
pub async fn filter_by_type(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, Error> {
    let service = PokemonService::new(&state.pokeapi);

    Ok((StatusCode::OK, Json(service.by_type(params.id).await?)))
}

/// Pokémon species introduced in one generation
#[utoipa::path(
    get,
    path = "/api/pokemon/filter-generation",
    tag = POKEMON_TAG,
    params(FilterParams),
    responses(
        (status = 200, description = "Pokémon of the generation, sorted by ID", body = PokemonListDto),
        (status = 404, description = "Unknown generation", body = ErrorDto),
        (status = 502, description = "PokeAPI request failed", body = ErrorDto)
    ),
)]
pub async fn filter_by_generation(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, Error> {
    let service = PokemonService::new(&state.pokeapi);

    Ok((StatusCode::OK, Json(service.by_generation(params.id).await?)))
}

/// Pokémon matching a generation and a type
#[utoipa::path(
    get,
    path = "/api/pokemon/filter-combined",
    tag = POKEMON_TAG,
    params(CombinedFilterParams),
    responses(
        (status = 200, description = "Pokémon matching both filters, sorted by ID", body = PokemonListDto),
        (status = 400, description = "Both filters set to all", body = ErrorDto),
        (status = 404, description = "Unknown type or generation", body = ErrorDto),
        (status = 502, description = "PokeAPI request failed", body = ErrorDto)
    ),
)]
pub async fn filter_combined(
    State(state): State<AppState>,
    Query(params): Query<CombinedFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let service = PokemonService::new(&state.pokeapi);

    let results = service.combined(params.gen_id, params.type_id).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Exact, case-insensitive lookup by name
#[utoipa::path(
    get,
    path = "/api/pokemon/search-name",
    tag = POKEMON_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "The Pokémon", body = PokemonDto),
        (status = 404, description = "No Pokémon with this name", body = ErrorDto),
        (status = 502, description = "PokeAPI request failed", body = ErrorDto)
    ),
)]
pub async fn search_by_name(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let service = PokemonService::new(&state.pokeapi);

    let pokemon = service.search_by_name(&params.name).await?;

    Ok((StatusCode::OK, Json(pokemon)))
}
