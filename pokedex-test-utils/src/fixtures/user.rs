//! User and per-Pokémon record fixtures.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts an active user whose password is [`TEST_PASSWORD`].
    ///
    /// The email is derived from the login as `{login}@example.com`.
    pub async fn insert_user(&self, login: &str) -> Result<entity::poke_user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::PokeUser::insert(entity::poke_user::ActiveModel {
                name: ActiveValue::Set(format!("Trainer {}", login)),
                login: ActiveValue::Set(login.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", login)),
                password_hash: ActiveValue::Set(password_hash),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a record for `user_id` with the given flags, named `pokemon-{code}`.
    pub async fn insert_user_pokemon(
        &self,
        user_id: i32,
        code: &str,
        favorite: bool,
        team: bool,
    ) -> Result<entity::user_pokemon::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::UserPokemon::insert(entity::user_pokemon::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                code: ActiveValue::Set(code.to_string()),
                name: ActiveValue::Set(format!("pokemon-{}", code)),
                image_url: ActiveValue::Set(None),
                favorite: ActiveValue::Set(favorite),
                team: ActiveValue::Set(team),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
