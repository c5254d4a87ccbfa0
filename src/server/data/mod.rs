//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for the `poke_user` and `user_pokemon` tables. They
//! return `DbErr` only, business rules live in the service layer.

pub mod user;
pub mod user_pokemon;
