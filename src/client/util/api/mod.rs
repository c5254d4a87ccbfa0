pub mod auth;
pub mod http;
pub mod pokemon;
pub mod user_pokemon;

pub use http::ApiError;
