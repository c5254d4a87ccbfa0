//! The signed-in user's favorites and battle team.

use dioxus_logger::tracing;

use crate::{
    client::util::api::{http, ApiError},
    model::user_pokemon::{
        plan_toggle, CreateUserPokemonDto, PokemonSnapshot, ToggleField, TogglePlan,
        UpdateUserPokemonDto, UserPokemonDto, UserPokemonQuery,
    },
};

pub async fn list_user_pokemon(query: &UserPokemonQuery) -> Vec<UserPokemonDto> {
    let path = format!("/pokemon-usuario/{}", query.to_query_string());

    http::get::<Vec<UserPokemonDto>>(&path)
        .await
        .unwrap_or_else(|err| {
            tracing::error!("Failed to fetch user Pokémon: {}", err);
            Vec::new()
        })
}

/// The user's record for a Pokémon code, if any
pub async fn find_user_pokemon(code: &str) -> Option<UserPokemonDto> {
    list_user_pokemon(&UserPokemonQuery::by_code(code))
        .await
        .into_iter()
        .next()
}

pub async fn create_user_pokemon(
    record: &CreateUserPokemonDto,
) -> Result<UserPokemonDto, ApiError> {
    http::post("/pokemon-usuario/", record).await
}

/// Returns `None` when the server removed the record because both flags ended up false.
pub async fn update_user_pokemon(
    id: i32,
    changes: &UpdateUserPokemonDto,
) -> Result<Option<UserPokemonDto>, ApiError> {
    http::patch(&format!("/pokemon-usuario/{}/", id), changes).await
}

pub async fn delete_user_pokemon(id: i32) -> Result<(), ApiError> {
    http::delete(&format!("/pokemon-usuario/{}/", id)).await
}

/// Flips `field` for the Pokémon in `snapshot` and returns the record as now persisted.
///
/// Issues exactly one request: a POST without `record`, a DELETE when both flags end up
/// false, and a PATCH otherwise.
pub async fn toggle_user_pokemon_status(
    record: Option<&UserPokemonDto>,
    snapshot: &PokemonSnapshot,
    field: ToggleField,
) -> Result<Option<UserPokemonDto>, ApiError> {
    match plan_toggle(record, snapshot, field) {
        TogglePlan::Create(new) => create_user_pokemon(&new).await.map(Some),
        TogglePlan::Update { id, changes } => update_user_pokemon(id, &changes).await,
        TogglePlan::Delete { id } => {
            delete_user_pokemon(id).await?;
            Ok(None)
        }
    }
}
