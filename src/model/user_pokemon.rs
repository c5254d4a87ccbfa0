//! Per-user Pokémon records and the favorite/team toggle.
//!
//! A record exists for a (user, Pokémon) pair only while at least one of its two flags is set.
//! [`plan_toggle`] decides which request keeps that true when a card button is pressed.

use serde::{Deserialize, Serialize};

use crate::model::pokemon::{official_artwork_url, PokemonDto};

/// Maximum number of Pokémon a user may have in their battle team
pub const TEAM_SIZE_LIMIT: u64 = 6;

/// Column widths of the stored record, in characters
pub const CODE_MAX_LEN: usize = 100;
pub const NAME_MAX_LEN: usize = 100;
pub const IMAGE_URL_MAX_LEN: usize = 255;

/// A stored per-user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserPokemonDto {
    pub id: i32,
    /// Pokémon ID as a string, as used by the catalog
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
    pub favorite: bool,
    pub team: bool,
}

impl UserPokemonDto {
    pub fn flag(&self, field: ToggleField) -> bool {
        match field {
            ToggleField::Favorite => self.favorite,
            ToggleField::Team => self.team,
        }
    }

    /// Converts the denormalized display fields back into a catalog entry.
    ///
    /// Returns `None` when the stored code is not a numeric Pokémon ID.
    pub fn to_pokemon(&self) -> Option<PokemonDto> {
        let id: i32 = self.code.parse().ok()?;

        Some(PokemonDto {
            id,
            name: self.name.clone(),
            image_url: self
                .image_url
                .clone()
                .unwrap_or_else(|| official_artwork_url(id)),
            types: Vec::new(),
        })
    }
}

/// Display fields of the card being toggled, copied into the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonSnapshot {
    pub code: String,
    pub name: String,
    pub image_url: String,
}

impl From<&PokemonDto> for PokemonSnapshot {
    fn from(pokemon: &PokemonDto) -> Self {
        Self {
            code: pokemon.id.to_string(),
            name: pokemon.name.clone(),
            image_url: pokemon.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateUserPokemonDto {
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub team: bool,
}

/// Partial update, absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateUserPokemonDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<bool>,
}

/// Filters for listing the caller's records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct UserPokemonQuery {
    /// Only the record for this Pokémon code
    pub code: Option<String>,
    /// Only records with this favorite flag
    pub favorite: Option<bool>,
    /// Only records with this team flag
    pub team: Option<bool>,
}

impl UserPokemonQuery {
    pub fn favorites() -> Self {
        Self {
            favorite: Some(true),
            ..Default::default()
        }
    }

    pub fn team() -> Self {
        Self {
            team: Some(true),
            ..Default::default()
        }
    }

    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Renders the filters as a query string, including the leading `?` when non-empty.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();

        if let Some(code) = &self.code {
            params.push(format!("code={}", urlencoding::encode(code)));
        }
        if let Some(favorite) = self.favorite {
            params.push(format!("favorite={}", favorite));
        }
        if let Some(team) = self.team {
            params.push(format!("team={}", team));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Which flag a card button flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleField {
    Favorite,
    Team,
}

impl ToggleField {
    pub fn other(self) -> Self {
        match self {
            Self::Favorite => Self::Team,
            Self::Team => Self::Favorite,
        }
    }
}

/// The single request that carries out a toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TogglePlan {
    /// No record existed; create one with the toggled flag set
    Create(CreateUserPokemonDto),
    /// A record exists and keeps at least one flag set
    Update {
        id: i32,
        changes: UpdateUserPokemonDto,
    },
    /// A record exists and both flags end up false
    Delete { id: i32 },
}

/// Decides how to flip `field` for the Pokémon described by `snapshot`.
///
/// The flipped value is `!record.flag(field)`, or `true` without a record.
pub fn plan_toggle(
    record: Option<&UserPokemonDto>,
    snapshot: &PokemonSnapshot,
    field: ToggleField,
) -> TogglePlan {
    let Some(record) = record else {
        let (favorite, team) = match field {
            ToggleField::Favorite => (true, false),
            ToggleField::Team => (false, true),
        };

        return TogglePlan::Create(CreateUserPokemonDto {
            code: snapshot.code.clone(),
            name: snapshot.name.clone(),
            image_url: Some(snapshot.image_url.clone()),
            favorite,
            team,
        });
    };

    let new_status = !record.flag(field);
    let other_status = record.flag(field.other());

    if !new_status && !other_status {
        return TogglePlan::Delete { id: record.id };
    }

    let (favorite, team) = match field {
        ToggleField::Favorite => (new_status, other_status),
        ToggleField::Team => (other_status, new_status),
    };

    TogglePlan::Update {
        id: record.id,
        changes: UpdateUserPokemonDto {
            code: Some(snapshot.code.clone()),
            name: Some(snapshot.name.clone()),
            image_url: Some(snapshot.image_url.clone()),
            favorite: Some(favorite),
            team: Some(team),
        },
    }
}
