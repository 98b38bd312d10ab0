//! 合辑实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "collections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub creator_id: i64,
    pub thumbnail: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatorId",
        to = "super::users::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::categories::Entity")]
    Categories,
    #[sea_orm(has_many = "super::favorite_collections::Entity")]
    FavoriteCollections,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::favorite_collections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCollections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_collection(self) -> crate::models::collections::entities::Collection {
        use crate::models::collections::entities::Collection;

        Collection {
            id: self.id,
            name: self.name,
            description: self.description,
            creator_id: self.creator_id,
            thumbnail: self.thumbnail,
            created_at: super::ts_to_datetime(self.created_at),
        }
    }
}
