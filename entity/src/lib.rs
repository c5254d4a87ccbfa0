pub mod prelude;

pub mod poke_user;
pub mod user_pokemon;
