//! Service layer for business logic.
//!
//! Services coordinate repositories and the PokeAPI client and enforce the rules the data
//! layer does not: credential checks, the battle team limit, and the rule that a record
//! never persists with both flags unset.

pub mod auth;
pub mod pokemon;
pub mod user_pokemon;
