use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, VideoOneError};
use crate::models::users::entities::{User, UserRole};
use sea_orm::{EntityTrait, Set, SqlErr, sea_query::OnConflict};
use tracing::warn;

impl SeaOrmStorage {
    /// 按身份提供方的声明创建或更新本地用户
    pub async fn sync_user_impl(&self, id: i64, username: &str, role: UserRole) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            username: Set(username.to_string()),
            role: Set(role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Users::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Username, Column::Role, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                // ID 冲突已由 upsert 处理，剩下的唯一冲突只能来自用户名
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    warn!(
                        "Username '{}' from token for user {} is held by another user: {}",
                        username, id, detail
                    );
                    VideoOneError::authentication(format!(
                        "Username '{username}' is already bound to another user"
                    ))
                }
                _ => VideoOneError::database_operation(format!("同步用户失败: {e}")),
            })?;

        self.get_user_by_id_impl(id)
            .await?
            .ok_or_else(|| VideoOneError::database_operation(format!("同步后未找到用户 {id}")))
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| VideoOneError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }
}
