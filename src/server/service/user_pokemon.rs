use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::user_pokemon::{
        CreateUserPokemonDto, UpdateUserPokemonDto, UserPokemonDto, UserPokemonQuery,
        CODE_MAX_LEN, IMAGE_URL_MAX_LEN, NAME_MAX_LEN, TEAM_SIZE_LIMIT,
    },
    server::{
        data::user_pokemon::UserPokemonRepository,
        error::{user_pokemon::UserPokemonError, Error},
        util::validate::{max_length, required},
    },
};

/// Outcome of a partial update
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(UserPokemonDto),
    /// The update cleared the last flag, so the record was removed
    Deleted,
}

/// Favorites and battle team records of a single user
pub struct UserPokemonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPokemonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        user_id: i32,
        query: &UserPokemonQuery,
    ) -> Result<Vec<UserPokemonDto>, Error> {
        let repo = UserPokemonRepository::new(self.db);

        let records = repo.list(user_id, query).await?;

        Ok(records.into_iter().map(UserPokemonDto::from).collect())
    }

    pub async fn get(&self, user_id: i32, record_id: i32) -> Result<UserPokemonDto, Error> {
        let repo = UserPokemonRepository::new(self.db);

        match repo.get(user_id, record_id).await? {
            Some(record) => Ok(record.into()),
            None => Err(UserPokemonError::NotFound { user_id, record_id }.into()),
        }
    }

    /// Creates a record for the user.
    ///
    /// # Returns
    /// - `Ok(UserPokemonDto)` - The created record
    /// - `Err(Error::BadRequest)` - `code` is blank or a field is longer than its column
    /// - `Err(UserPokemonError::NoFlagSet)` - Neither favorite nor team is set
    /// - `Err(UserPokemonError::DuplicateCode)` - The user already has a record for the code
    /// - `Err(UserPokemonError::TeamFull)` - `team` is set and the team is already full
    pub async fn create(
        &self,
        user_id: i32,
        record: CreateUserPokemonDto,
    ) -> Result<UserPokemonDto, Error> {
        required("code", &record.code)?;
        max_length("code", &record.code, CODE_MAX_LEN)?;
        max_length("name", &record.name, NAME_MAX_LEN)?;
        if let Some(image_url) = &record.image_url {
            max_length("image_url", image_url, IMAGE_URL_MAX_LEN)?;
        }

        if !record.favorite && !record.team {
            return Err(UserPokemonError::NoFlagSet.into());
        }

        let repo = UserPokemonRepository::new(self.db);

        if repo.find_by_code(user_id, &record.code).await?.is_some() {
            return Err(UserPokemonError::DuplicateCode {
                user_id,
                code: record.code,
            }
            .into());
        }

        if record.team {
            self.ensure_team_has_room(&repo, user_id).await?;
        }

        let code = record.code.clone();
        let created = repo
            .create(user_id, record)
            .await
            .map_err(|err| duplicate_code_or(err, user_id, &code))?;

        tracing::debug!(
            user_id = %user_id,
            record_id = %created.id,
            code = %created.code,
            "Created user Pokémon record"
        );

        Ok(created.into())
    }

    /// Applies a partial update.
    ///
    /// Switching `team` on is subject to the team limit. When the update leaves both flags
    /// false the record is deleted instead and [`UpdateOutcome::Deleted`] is returned.
    pub async fn update(
        &self,
        user_id: i32,
        record_id: i32,
        changes: UpdateUserPokemonDto,
    ) -> Result<UpdateOutcome, Error> {
        let repo = UserPokemonRepository::new(self.db);

        let Some(record) = repo.get(user_id, record_id).await? else {
            return Err(UserPokemonError::NotFound { user_id, record_id }.into());
        };

        if let Some(code) = &changes.code {
            required("code", code)?;
            max_length("code", code, CODE_MAX_LEN)?;
        }
        if let Some(name) = &changes.name {
            max_length("name", name, NAME_MAX_LEN)?;
        }
        if let Some(image_url) = &changes.image_url {
            max_length("image_url", image_url, IMAGE_URL_MAX_LEN)?;
        }

        let favorite = changes.favorite.unwrap_or(record.favorite);
        let team = changes.team.unwrap_or(record.team);

        if !favorite && !team {
            repo.delete(user_id, record_id).await?;

            tracing::debug!(
                user_id = %user_id,
                record_id = %record_id,
                "Deleted user Pokémon record after both flags were cleared"
            );

            return Ok(UpdateOutcome::Deleted);
        }

        if team && !record.team {
            self.ensure_team_has_room(&repo, user_id).await?;
        }

        if let Some(code) = &changes.code {
            if *code != record.code && repo.find_by_code(user_id, code).await?.is_some() {
                return Err(UserPokemonError::DuplicateCode {
                    user_id,
                    code: code.clone(),
                }
                .into());
            }
        }

        let code = changes.code.clone().unwrap_or_else(|| record.code.clone());
        let updated = repo
            .update(record, changes)
            .await
            .map_err(|err| duplicate_code_or(err, user_id, &code))?;

        Ok(UpdateOutcome::Updated(updated.into()))
    }

    pub async fn delete(&self, user_id: i32, record_id: i32) -> Result<(), Error> {
        let repo = UserPokemonRepository::new(self.db);

        if !repo.delete(user_id, record_id).await? {
            return Err(UserPokemonError::NotFound { user_id, record_id }.into());
        }

        Ok(())
    }

    async fn ensure_team_has_room(
        &self,
        repo: &UserPokemonRepository<'_, DatabaseConnection>,
        user_id: i32,
    ) -> Result<(), Error> {
        if repo.count_team(user_id).await? >= TEAM_SIZE_LIMIT {
            return Err(UserPokemonError::TeamFull(user_id).into());
        }

        Ok(())
    }
}

/// Maps a violation of the (user, code) unique index, hit when two writes race past the
/// duplicate check, to [`UserPokemonError::DuplicateCode`].
fn duplicate_code_or(err: DbErr, user_id: i32, code: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserPokemonError::DuplicateCode {
            user_id,
            code: code.to_string(),
        }
        .into(),
        _ => err.into(),
    }
}
