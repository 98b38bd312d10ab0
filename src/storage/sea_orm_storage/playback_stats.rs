use super::SeaOrmStorage;
use super::videos::category_ids_of;
use crate::entity::playback_stats::{ActiveModel, Column, Entity as PlaybackStats};
use crate::entity::users::Entity as Users;
use crate::entity::videos::{Column as VideoColumn, Entity as Videos};
use crate::errors::{Result, VideoOneError};
use crate::models::{playback::entities::PlaybackStat, stats::entities::CourseProgressRecord};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
    sea_query::{Expr, OnConflict, SimpleExpr},
};

/// 冲突时保留较大进度的表达式
fn max_progress_expr(backend: DatabaseBackend) -> SimpleExpr {
    match backend {
        DatabaseBackend::MySql => Expr::cust("GREATEST(`progress`, VALUES(`progress`))"),
        DatabaseBackend::Postgres => {
            Expr::cust(r#"GREATEST("playback_stats"."progress", EXCLUDED."progress")"#)
        }
        DatabaseBackend::Sqlite => {
            Expr::cust(r#"MAX("playback_stats"."progress", excluded."progress")"#)
        }
    }
}

impl SeaOrmStorage {
    /// 单条语句完成 upsert，并发上报不会让进度回退
    pub async fn upsert_playback_progress_impl(
        &self,
        user_id: i64,
        video_id: i64,
        progress: i32,
        duration: i32,
    ) -> Result<PlaybackStat> {
        let now = chrono::Utc::now().timestamp();
        let backend = self.db.get_database_backend();

        let model = ActiveModel {
            video_id: Set(video_id),
            user_id: Set(user_id),
            progress: Set(progress),
            duration: Set(duration),
            last_played_at: Set(now),
            ..Default::default()
        };

        PlaybackStats::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::VideoId])
                    .value(Column::Progress, max_progress_expr(backend))
                    .update_columns([Column::Duration, Column::LastPlayedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("更新播放进度失败: {e}")))?;

        self.find_playback_stat(user_id, video_id).await
    }

    /// 不存在时插入进度为 0 的记录，已存在时原样返回
    pub async fn ensure_playback_stat_impl(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<PlaybackStat> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            video_id: Set(video_id),
            user_id: Set(user_id),
            progress: Set(0),
            duration: Set(0),
            last_played_at: Set(now),
            ..Default::default()
        };

        PlaybackStats::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::VideoId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("创建播放记录失败: {e}")))?;

        self.find_playback_stat(user_id, video_id).await
    }

    async fn find_playback_stat(&self, user_id: i64, video_id: i64) -> Result<PlaybackStat> {
        PlaybackStats::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::VideoId.eq(video_id))
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询播放记录失败: {e}")))?
            .map(|m| m.into_playback_stat())
            .ok_or_else(|| {
                VideoOneError::database_operation(format!(
                    "播放记录写入后未找到: user {user_id}, video {video_id}"
                ))
            })
    }

    /// 用户全部播放记录，最近播放的在前
    pub async fn list_user_playback_stats_impl(&self, user_id: i64) -> Result<Vec<PlaybackStat>> {
        let result = PlaybackStats::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::LastPlayedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询播放记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_playback_stat()).collect())
    }

    /// 用户在一组课程内的播放记录
    pub async fn list_user_collection_playback_impl(
        &self,
        user_id: i64,
        collection_ids: &[i64],
    ) -> Result<Vec<PlaybackStat>> {
        let video_ids = self.collection_video_ids(collection_ids).await?;
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = PlaybackStats::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::VideoId.is_in(video_ids))
            .order_by_asc(Column::VideoId)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询播放记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_playback_stat()).collect())
    }

    /// 课程全部播放记录，附带用户名
    pub async fn list_course_progress_records_impl(
        &self,
        collection_id: i64,
    ) -> Result<Vec<CourseProgressRecord>> {
        let video_ids = self.collection_video_ids(&[collection_id]).await?;
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = PlaybackStats::find()
            .filter(Column::VideoId.is_in(video_ids))
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询课程播放记录失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(stat, user)| CourseProgressRecord {
                user_id: stat.user_id,
                username: user.map(|u| u.username).unwrap_or_default(),
                video_id: stat.video_id,
                progress: stat.progress,
            })
            .collect())
    }

    async fn collection_video_ids(&self, collection_ids: &[i64]) -> Result<Vec<i64>> {
        let category_ids = category_ids_of(&self.db, collection_ids).await?;
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        Videos::find()
            .select_only()
            .column(VideoColumn::Id)
            .filter(VideoColumn::CategoryId.is_in(category_ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询课程视频失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{QueryTrait, sea_query::SqliteQueryBuilder};

    #[test]
    fn test_upsert_sql_keeps_max_progress_on_sqlite() {
        let model = ActiveModel {
            video_id: Set(1),
            user_id: Set(2),
            progress: Set(30),
            duration: Set(10),
            last_played_at: Set(0),
            ..Default::default()
        };
        let sql = PlaybackStats::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::VideoId])
                    .value(Column::Progress, max_progress_expr(DatabaseBackend::Sqlite))
                    .update_columns([Column::Duration, Column::LastPlayedAt])
                    .to_owned(),
            )
            .into_query()
            .to_string(SqliteQueryBuilder);

        assert!(sql.contains(r#"ON CONFLICT ("user_id", "video_id") DO UPDATE"#));
        assert!(sql.contains(r#""progress" = MAX("playback_stats"."progress", excluded."progress")"#));
        assert!(sql.contains(r#""duration" = "excluded"."duration""#));
    }
}
