use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokeUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PokeUser::Id))
                    .col(string_len(PokeUser::Name, 100))
                    .col(string_len_uniq(PokeUser::Login, 100))
                    .col(string_len_uniq(PokeUser::Email, 255))
                    .col(string_len(PokeUser::PasswordHash, 180))
                    .col(boolean(PokeUser::IsActive).default(true))
                    .col(timestamp(PokeUser::CreatedAt))
                    .col(timestamp(PokeUser::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PokeUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PokeUser {
    Table,
    Id,
    Name,
    Login,
    Email,
    PasswordHash,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
