use serde::{Deserialize, Serialize};

/// Selector value meaning "no restriction" for the type and generation filters
pub const ALL_SENTINEL: i32 = 0;

/// Default number of Pokémon per listing page
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

static OFFICIAL_ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// A Pokémon as displayed by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PokemonDto {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    /// Type names, empty when the source listing does not carry them
    #[serde(default)]
    pub types: Vec<String>,
}

impl PokemonDto {
    /// Builds an entry from a bare listing item, using the default artwork for the image.
    pub fn from_listing(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: official_artwork_url(id),
            types: Vec::new(),
        }
    }
}

/// One page of the paginated catalog listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PokemonPageDto {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PokemonDto>,
}

/// Unpaginated filter results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PokemonListDto {
    pub results: Vec<PokemonDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GenerationDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TypeListDto {
    pub types: Vec<TypeDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GenerationListDto {
    pub generations: Vec<GenerationDto>,
}

/// Default artwork URL for a Pokémon ID
pub fn official_artwork_url(id: i32) -> String {
    format!("{}/{}.png", OFFICIAL_ARTWORK_BASE_URL, id)
}

/// Dropdown label for a generation
pub fn generation_display_name(id: i32) -> String {
    format!("Generation {}", id)
}

/// Extracts the numeric ID from a resource URL such as `https://pokeapi.co/api/v2/pokemon/25/`
pub fn resource_id_from_url(url: &str) -> Option<i32> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()?
        .parse()
        .ok()
}
