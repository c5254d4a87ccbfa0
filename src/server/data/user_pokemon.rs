use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user_pokemon::{CreateUserPokemonDto, UpdateUserPokemonDto, UserPokemonQuery},
    server::model::db::UserPokemonModel,
};

/// Queries over `user_pokemon`, every method scoped to a single owner
pub struct UserPokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserPokemonRepository<'a, C> {
    /// Creates a new instance of [`UserPokemonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        record: CreateUserPokemonDto,
    ) -> Result<UserPokemonModel, DbErr> {
        let now = Utc::now().naive_utc();

        let record = entity::user_pokemon::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            code: ActiveValue::Set(record.code),
            name: ActiveValue::Set(record.name),
            image_url: ActiveValue::Set(record.image_url),
            favorite: ActiveValue::Set(record.favorite),
            team: ActiveValue::Set(record.team),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Gets a record by ID, `None` if it does not exist or belongs to another user
    pub async fn get(
        &self,
        user_id: i32,
        record_id: i32,
    ) -> Result<Option<UserPokemonModel>, DbErr> {
        entity::prelude::UserPokemon::find_by_id(record_id)
            .filter(entity::user_pokemon::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_code(
        &self,
        user_id: i32,
        code: &str,
    ) -> Result<Option<UserPokemonModel>, DbErr> {
        entity::prelude::UserPokemon::find()
            .filter(entity::user_pokemon::Column::UserId.eq(user_id))
            .filter(entity::user_pokemon::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Lists the user's records matching every filter that is set, ordered by ID
    pub async fn list(
        &self,
        user_id: i32,
        query: &UserPokemonQuery,
    ) -> Result<Vec<UserPokemonModel>, DbErr> {
        let mut select = entity::prelude::UserPokemon::find()
            .filter(entity::user_pokemon::Column::UserId.eq(user_id));

        if let Some(code) = &query.code {
            select = select.filter(entity::user_pokemon::Column::Code.eq(code.as_str()));
        }
        if let Some(favorite) = query.favorite {
            select = select.filter(entity::user_pokemon::Column::Favorite.eq(favorite));
        }
        if let Some(team) = query.team {
            select = select.filter(entity::user_pokemon::Column::Team.eq(team));
        }

        select
            .order_by_asc(entity::user_pokemon::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of records the user has in their battle team
    pub async fn count_team(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::UserPokemon::find()
            .filter(entity::user_pokemon::Column::UserId.eq(user_id))
            .filter(entity::user_pokemon::Column::Team.eq(true))
            .count(self.db)
            .await
    }

    /// Applies the fields present in `changes` to an existing record
    pub async fn update(
        &self,
        record: UserPokemonModel,
        changes: UpdateUserPokemonDto,
    ) -> Result<UserPokemonModel, DbErr> {
        let mut record_am = record.into_active_model();

        if let Some(code) = changes.code {
            record_am.code = ActiveValue::Set(code);
        }
        if let Some(name) = changes.name {
            record_am.name = ActiveValue::Set(name);
        }
        if let Some(image_url) = changes.image_url {
            record_am.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(favorite) = changes.favorite {
            record_am.favorite = ActiveValue::Set(favorite);
        }
        if let Some(team) = changes.team {
            record_am.team = ActiveValue::Set(team);
        }
        record_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        record_am.update(self.db).await
    }

    /// Deletes a record, returning `false` if the user had no record with that ID
    pub async fn delete(&self, user_id: i32, record_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserPokemon::delete_many()
            .filter(entity::user_pokemon::Column::Id.eq(record_id))
            .filter(entity::user_pokemon::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
