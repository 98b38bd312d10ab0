//! 播放记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "playback_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub video_id: i64,
    pub user_id: i64,
    pub progress: i32,
    pub duration: i32,
    pub last_played_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::videos::Entity",
        from = "Column::VideoId",
        to = "super::videos::Column::Id"
    )]
    Video,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::videos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_playback_stat(self) -> crate::models::playback::entities::PlaybackStat {
        use crate::models::playback::entities::PlaybackStat;

        PlaybackStat {
            id: self.id,
            video_id: self.video_id,
            user_id: self.user_id,
            progress: self.progress,
            duration: self.duration,
            last_played_at: super::ts_to_datetime(self.last_played_at),
        }
    }
}
