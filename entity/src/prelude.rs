pub use super::poke_user::Entity as PokeUser;
pub use super::user_pokemon::Entity as UserPokemon;
