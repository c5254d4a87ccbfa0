use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_pokemon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
    pub favorite: bool,
    pub team: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::poke_user::Entity",
        from = "Column::UserId",
        to = "super::poke_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PokeUser,
}

impl Related<super::poke_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokeUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
