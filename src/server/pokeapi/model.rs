//! Upstream PokeAPI response shapes.
//!
//! Only the fields the catalog uses are modelled, everything else in the upstream payloads is
//! ignored during deserialization.

use serde::Deserialize;

use crate::model::pokemon::{
    official_artwork_url, resource_id_from_url, GenerationDto, PokemonDto, TypeDto,
};

/// A `{name, url}` reference to another resource
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResource {
    pub name: String,
    pub url: String,
}

impl ApiResource {
    pub fn id(&self) -> Option<i32> {
        resource_id_from_url(&self.url)
    }

    /// Converts a Pokémon or species reference into a bare catalog entry.
    pub fn to_pokemon(&self) -> Option<PokemonDto> {
        self.id().map(|id| PokemonDto::from_listing(id, &self.name))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResourceList {
    #[serde(default)]
    pub count: i64,
    pub results: Vec<ApiResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemonType {
    pub slot: i32,
    #[serde(rename = "type")]
    pub kind: ApiResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ApiArtwork,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: ApiOtherSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<ApiPokemonType>,
    #[serde(default)]
    pub sprites: ApiSprites,
}

impl From<ApiPokemon> for PokemonDto {
    fn from(mut pokemon: ApiPokemon) -> Self {
        pokemon.types.sort_by_key(|t| t.slot);

        let image_url = pokemon
            .sprites
            .other
            .official_artwork
            .front_default
            .or(pokemon.sprites.front_default)
            .unwrap_or_else(|| official_artwork_url(pokemon.id));

        Self {
            id: pokemon.id,
            name: pokemon.name,
            image_url,
            types: pokemon.types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypePokemon {
    pub pokemon: ApiResource,
}

/// `/type/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiType {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<ApiTypePokemon>,
}

/// `/generation/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiGeneration {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub pokemon_species: Vec<ApiResource>,
}

impl ApiResourceList {
    pub fn to_types(&self) -> Vec<TypeDto> {
        self.results
            .iter()
            .filter_map(|t| {
                t.id().map(|id| TypeDto {
                    id,
                    name: t.name.clone(),
                })
            })
            .collect()
    }

    pub fn to_generations(&self) -> Vec<GenerationDto> {
        self.results
            .iter()
            .filter_map(|g| {
                g.id().map(|id| GenerationDto {
                    id,
                    name: g.name.clone(),
                })
            })
            .collect()
    }
}
