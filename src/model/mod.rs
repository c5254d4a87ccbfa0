//! Types shared between the browser client and the server.
//!
//! Everything here is platform independent so the same DTOs travel over the wire in both
//! directions and the client-side state logic can be unit tested natively.

pub mod api;
pub mod auth;
pub mod listing;
pub mod pokemon;
pub mod user_pokemon;
