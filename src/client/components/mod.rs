pub mod auth;
pub mod page;
pub mod pokemon_card;
pub mod pokemon_grid;

pub use page::Page;
pub use pokemon_card::PokemonCard;
pub use pokemon_grid::PokemonGrid;
