use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Fields of a user about to be registered
pub struct NewUser {
    pub name: String,
    pub login: String,
    pub email: String,
    pub password_hash: String,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    pub async fn create(&self, user: NewUser) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::poke_user::ActiveModel {
            name: ActiveValue::Set(user.name),
            login: ActiveValue::Set(user.login),
            email: ActiveValue::Set(user.email),
            password_hash: ActiveValue::Set(user.password_hash),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::PokeUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_login(&self, login: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::PokeUser::find()
            .filter(entity::poke_user::Column::Login.eq(login))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::PokeUser::find()
            .filter(entity::poke_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
