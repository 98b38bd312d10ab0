//! 视频实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub url: String,
    pub duration: String,
    pub thumbnail: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::playback_stats::Entity")]
    PlaybackStats,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::playback_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaybackStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_video(self) -> crate::models::videos::entities::Video {
        use crate::models::videos::entities::Video;
        use crate::utils::validate::duration_to_seconds;

        Video {
            id: self.id,
            category_id: self.category_id,
            title: self.title,
            description: self.description,
            url: self.url,
            duration_seconds: duration_to_seconds(&self.duration),
            duration: self.duration,
            thumbnail: self.thumbnail,
            created_at: super::ts_to_datetime(self.created_at),
        }
    }
}
