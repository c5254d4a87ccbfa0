//! Test fixture modules for database and HTTP mock creation.
//!
//! - `pokeapi` - JSON payloads and mock endpoints imitating PokeAPI
//! - `user` - Users and their per-Pokémon records

pub mod pokeapi;
pub mod user;
