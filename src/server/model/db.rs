//! Database model type aliases.

/// Type alias for a registered user.
///
/// # Fields (from `entity::poke_user::Model`)
/// - `id` - Primary key, carried as `user_id` in issued tokens
/// - `name` - Display name
/// - `login` - Unique login used to obtain tokens
/// - `email` - Unique email address
/// - `password_hash` - Argon2 PHC string
/// - `is_active` - Inactive users cannot obtain tokens
/// - `created_at` / `updated_at` - Record timestamps
pub type UserModel = entity::poke_user::Model;

/// Type alias for a per-user Pokémon record.
///
/// Holds the favorite and team flags plus the display fields copied from the catalog at the
/// time the record was created or last updated.
pub type UserPokemonModel = entity::user_pokemon::Model;

impl From<UserPokemonModel> for crate::model::user_pokemon::UserPokemonDto {
    fn from(model: UserPokemonModel) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            image_url: model.image_url,
            favorite: model.favorite,
            team: model.team,
        }
    }
}

impl From<UserModel> for crate::model::auth::UserDto {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            login: model.login,
            email: model.email,
        }
    }
}
