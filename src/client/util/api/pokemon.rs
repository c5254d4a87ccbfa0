//! Catalog requests. Failures are logged and degrade to an empty result.

use dioxus_logger::tracing;

use crate::{
    client::util::api::http,
    model::pokemon::{
        GenerationDto, GenerationListDto, PokemonDto, PokemonListDto, PokemonPageDto, TypeDto,
        TypeListDto,
    },
};

pub async fn get_pokemon_page(offset: u32, limit: u32) -> PokemonPageDto {
    let path = format!("/pokemon/?offset={}&limit={}", offset, limit);

    http::get::<PokemonPageDto>(&path)
        .await
        .unwrap_or_else(|err| {
            tracing::error!("Failed to fetch Pokémon page: {}", err);
            PokemonPageDto::default()
        })
}

pub async fn get_pokemon(id: i32) -> Option<PokemonDto> {
    match http::get::<PokemonDto>(&format!("/pokemon/{}/", id)).await {
        Ok(pokemon) => Some(pokemon),
        Err(err) => {
            tracing::error!("Failed to fetch Pokémon {}: {}", id, err);
            None
        }
    }
}

pub async fn get_types() -> Vec<TypeDto> {
    match http::get::<TypeListDto>("/pokemon/types").await {
        Ok(list) => list.types,
        Err(err) => {
            tracing::error!("Failed to fetch types: {}", err);
            Vec::new()
        }
    }
}

pub async fn get_generations() -> Vec<GenerationDto> {
    match http::get::<GenerationListDto>("/pokemon/generations").await {
        Ok(list) => list.generations,
        Err(err) => {
            tracing::error!("Failed to fetch generations: {}", err);
            Vec::new()
        }
    }
}

pub async fn filter_by_type(type_id: i32) -> Vec<PokemonDto> {
    get_list(&format!("/pokemon/filter-type?id={}", type_id)).await
}

pub async fn filter_by_generation(generation_id: i32) -> Vec<PokemonDto> {
    get_list(&format!("/pokemon/filter-generation?id={}", generation_id)).await
}

pub async fn filter_combined(generation_id: i32, type_id: i32) -> Vec<PokemonDto> {
    get_list(&format!(
        "/pokemon/filter-combined?gen_id={}&type_id={}",
        generation_id, type_id
    ))
    .await
}

/// Looks a Pokémon up by exact name, `None` when there is no match.
pub async fn search_by_name(name: &str) -> Option<PokemonDto> {
    let path = format!("/pokemon/search-name?name={}", urlencoding::encode(name));

    match http::get::<PokemonDto>(&path).await {
        Ok(pokemon) => Some(pokemon),
        Err(err) if err.status() == Some(404) => None,
        Err(err) => {
            tracing::error!("Failed to search Pokémon {:?}: {}", name, err);
            None
        }
    }
}

async fn get_list(path: &str) -> Vec<PokemonDto> {
    match http::get::<PokemonListDto>(path).await {
        Ok(list) => list.results,
        Err(err) => {
            tracing::error!("Failed to fetch {}: {}", path, err);
            Vec::new()
        }
    }
}
