use std::collections::HashSet;

use crate::{
    model::pokemon::{
        GenerationListDto, PokemonDto, PokemonListDto, PokemonPageDto, TypeListDto,
        ALL_SENTINEL, DEFAULT_PAGE_LIMIT,
    },
    server::{
        error::{pokeapi::PokeApiError, Error},
        pokeapi::{PokeApiClient, MAX_PAGE_LIMIT},
    },
};

/// Path the listing's `next`/`previous` links point at
static LISTING_PATH: &str = "/api/pokemon/";

/// Catalog lookups proxied to PokeAPI and reshaped into catalog DTOs
pub struct PokemonService<'a> {
    client: &'a PokeApiClient,
}

impl<'a> PokemonService<'a> {
    pub fn new(client: &'a PokeApiClient) -> Self {
        Self { client }
    }

    /// Fetches one listing page.
    ///
    /// `limit` defaults to 20 and is clamped to 1..=100. The `next` and `previous` links are
    /// rewritten to point at this server's listing endpoint.
    pub async fn list(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PokemonPageDto, Error> {
        let offset = offset.unwrap_or(0);
        let limit = limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT);

        let page = self.client.list_pokemon(offset, limit).await?;

        let next = (i64::from(offset) + i64::from(limit) < page.count)
            .then(|| page_link(offset + limit, limit));
        let previous = (offset > 0).then(|| page_link(offset.saturating_sub(limit), limit));

        Ok(PokemonPageDto {
            count: page.count,
            next,
            previous,
            results: page
                .results
                .iter()
                .filter_map(|entry| entry.to_pokemon())
                .collect(),
        })
    }

    /// Fetches one Pokémon with its types by ID.
    pub async fn get(&self, pokemon_id: i32) -> Result<PokemonDto, Error> {
        let pokemon = self.client.get_pokemon(&pokemon_id.to_string()).await?;

        Ok(pokemon.into())
    }

    /// Looks a Pokémon up by exact name, ignoring case and surrounding whitespace.
    pub async fn search_by_name(&self, name: &str) -> Result<PokemonDto, Error> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(PokeApiError::NotFound("/pokemon/".to_string()).into());
        }

        let pokemon = self.client.get_pokemon(&name).await?;

        Ok(pokemon.into())
    }

    pub async fn types(&self) -> Result<TypeListDto, Error> {
        let types = self.client.list_types().await?;

        Ok(TypeListDto {
            types: types.to_types(),
        })
    }

    pub async fn generations(&self) -> Result<GenerationListDto, Error> {
        let generations = self.client.list_generations().await?;

        Ok(GenerationListDto {
            generations: generations.to_generations(),
        })
    }

    /// Every Pokémon of a type, sorted by ID. The "all" sentinel yields no results.
    pub async fn by_type(&self, type_id: i32) -> Result<PokemonListDto, Error> {
        Ok(PokemonListDto {
            results: sorted(self.fetch_type(type_id).await?),
        })
    }

    /// Every Pokémon species introduced in a generation, sorted by ID. The "all" sentinel
    /// yields no results.
    pub async fn by_generation(&self, generation_id: i32) -> Result<PokemonListDto, Error> {
        Ok(PokemonListDto {
            results: sorted(self.fetch_generation(generation_id).await?),
        })
    }

    /// Pokémon matching both a generation and a type.
    ///
    /// A sentinel on one side drops that restriction. Both sides at the sentinel is a bad
    /// request, the caller is expected to use the paginated listing instead.
    pub async fn combined(
        &self,
        generation_id: i32,
        type_id: i32,
    ) -> Result<PokemonListDto, Error> {
        match (generation_id, type_id) {
            (ALL_SENTINEL, ALL_SENTINEL) => Err(Error::BadRequest(
                "At least one of gen_id and type_id must be set".to_string(),
            )),
            (ALL_SENTINEL, type_id) => self.by_type(type_id).await,
            (generation_id, ALL_SENTINEL) => self.by_generation(generation_id).await,
            (generation_id, type_id) => {
                let (of_generation, of_type) = futures::try_join!(
                    self.fetch_generation(generation_id),
                    self.fetch_type(type_id)
                )?;

                let generation_ids: HashSet<i32> = of_generation.iter().map(|p| p.id).collect();

                Ok(PokemonListDto {
                    results: sorted(
                        of_type
                            .into_iter()
                            .filter(|p| generation_ids.contains(&p.id))
                            .collect(),
                    ),
                })
            }
        }
    }

    async fn fetch_type(&self, type_id: i32) -> Result<Vec<PokemonDto>, PokeApiError> {
        if type_id == ALL_SENTINEL {
            return Ok(Vec::new());
        }

        let kind = self.client.get_type(type_id).await?;

        Ok(kind
            .pokemon
            .iter()
            .filter_map(|entry| entry.pokemon.to_pokemon())
            .collect())
    }

    async fn fetch_generation(&self, generation_id: i32) -> Result<Vec<PokemonDto>, PokeApiError> {
        if generation_id == ALL_SENTINEL {
            return Ok(Vec::new());
        }

        let generation = self.client.get_generation(generation_id).await?;

        Ok(generation
            .pokemon_species
            .iter()
            .filter_map(|species| species.to_pokemon())
            .collect())
    }
}

fn page_link(offset: u32, limit: u32) -> String {
    format!("{}?offset={}&limit={}", LISTING_PATH, offset, limit)
}

fn sorted(mut pokemon: Vec<PokemonDto>) -> Vec<PokemonDto> {
    pokemon.sort_by_key(|p| p.id);
    pokemon
}
