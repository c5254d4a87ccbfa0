use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_poke_user::PokeUser;

static IDX_USER_POKEMON_USER_CODE: &str = "idx_user_pokemon_user_id_code";
static FK_USER_POKEMON_USER_ID: &str = "fk_user_pokemon_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPokemon::Id))
                    .col(integer(UserPokemon::UserId))
                    .col(string_len(UserPokemon::Code, 100))
                    .col(string_len(UserPokemon::Name, 100))
                    .col(string_len_null(UserPokemon::ImageUrl, 255))
                    .col(boolean(UserPokemon::Favorite).default(false))
                    .col(boolean(UserPokemon::Team).default(false))
                    .col(timestamp(UserPokemon::CreatedAt))
                    .col(timestamp(UserPokemon::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_POKEMON_USER_CODE)
                    .table(UserPokemon::Table)
                    .col(UserPokemon::UserId)
                    .col(UserPokemon::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_POKEMON_USER_ID)
                    .from_tbl(UserPokemon::Table)
                    .from_col(UserPokemon::UserId)
                    .to_tbl(PokeUser::Table)
                    .to_col(PokeUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_POKEMON_USER_ID)
                    .table(UserPokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_POKEMON_USER_CODE)
                    .table(UserPokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserPokemon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserPokemon {
    Table,
    Id,
    UserId,
    Code,
    Name,
    ImageUrl,
    Favorite,
    Team,
    CreatedAt,
    UpdatedAt,
}
