//! Server application core modules.
//!
//! Backend for the Pokedex application: a PokeAPI proxy for the catalog, JWT authentication,
//! user registration, and per-user favorites and battle team records stored through SeaORM.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod pokeapi;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
