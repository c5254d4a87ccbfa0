//! Factory functions for PokeAPI JSON payloads.
//!
//! Payloads only carry the fields the server reads, using the same URL layout as the real
//! service so IDs can be parsed from resource URLs.

use serde_json::{json, Value};

static RESOURCE_BASE_URL: &str = "https://pokeapi.co/api/v2";

fn resource(kind: &str, id: i32, name: &str) -> Value {
    json!({
        "name": name,
        "url": format!("{}/{}/{}/", RESOURCE_BASE_URL, kind, id),
    })
}

/// `/pokemon/{id}` payload with the given type names in slot order.
pub fn pokemon(id: i32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, type_name)| {
            json!({
                "slot": i + 1,
                "type": resource("type", i as i32 + 1, type_name),
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "types": types,
        "sprites": {
            "front_default": format!("https://img.example/front/{}.png", id),
            "other": {
                "official-artwork": {
                    "front_default": format!("https://img.example/artwork/{}.png", id),
                }
            }
        }
    })
}

/// `/pokemon?offset&limit` payload.
pub fn pokemon_list(count: i64, entries: &[(i32, &str)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(id, name)| resource("pokemon", *id, name))
        .collect();

    json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": results,
    })
}

/// `/type` payload.
pub fn type_list(entries: &[(i32, &str)]) -> Value {
    named_list("type", entries)
}

/// `/generation` payload.
pub fn generation_list(entries: &[(i32, &str)]) -> Value {
    named_list("generation", entries)
}

fn named_list(kind: &str, entries: &[(i32, &str)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(id, name)| resource(kind, *id, name))
        .collect();

    json!({
        "count": entries.len(),
        "results": results,
    })
}

/// `/type/{id}` payload listing the given Pokémon.
pub fn type_detail(type_id: i32, name: &str, pokemon: &[(i32, &str)]) -> Value {
    let pokemon: Vec<Value> = pokemon
        .iter()
        .map(|(id, name)| {
            json!({
                "slot": 1,
                "pokemon": resource("pokemon", *id, name),
            })
        })
        .collect();

    json!({
        "id": type_id,
        "name": name,
        "pokemon": pokemon,
    })
}

/// `/generation/{id}` payload listing the given species.
pub fn generation_detail(generation_id: i32, name: &str, species: &[(i32, &str)]) -> Value {
    let species: Vec<Value> = species
        .iter()
        .map(|(id, name)| resource("pokemon-species", *id, name))
        .collect();

    json!({
        "id": generation_id,
        "name": name,
        "pokemon_species": species,
    })
}
