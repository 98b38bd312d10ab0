use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建合辑（课程）表
        manager
            .create_table(
                Table::create()
                    .table(Collections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Collections::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Collections::Description).text().null())
                    .col(
                        ColumnDef::new(Collections::CreatorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Collections::Thumbnail).string().null())
                    .col(
                        ColumnDef::new(Collections::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Collections::Table, Collections::CreatorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建分类表
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::CollectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Categories::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Categories::Progress)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Categories::Table, Categories::CollectionId)
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建视频表
        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Videos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Videos::CategoryId).big_integer().not_null())
                    .col(ColumnDef::new(Videos::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Videos::Description).text().null())
                    .col(ColumnDef::new(Videos::Url).string().not_null())
                    .col(
                        ColumnDef::new(Videos::Duration)
                            .string_len(10)
                            .not_null()
                            .default("00:00"),
                    )
                    .col(ColumnDef::new(Videos::Thumbnail).string().null())
                    .col(ColumnDef::new(Videos::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Videos::Table, Videos::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学习资料表
        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Materials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Materials::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Materials::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Materials::Description).text().null())
                    .col(ColumnDef::new(Materials::Url).string_len(200).not_null())
                    .col(ColumnDef::new(Materials::Date).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Materials::Table, Materials::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Homeworks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Homeworks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Homeworks::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Homeworks::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Homeworks::Description).text().null())
                    .col(ColumnDef::new(Homeworks::Deadline).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Homeworks::Table, Homeworks::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Questions::HomeworkId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::QuestionType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Questions::Content).text().not_null())
                    .col(ColumnDef::new(Questions::Options).text().not_null())
                    .col(ColumnDef::new(Questions::Score).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::HomeworkId)
                            .to(Homeworks::Table, Homeworks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表（只追加）
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scores::HomeworkId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::Score).big_integer().not_null())
                    .col(
                        ColumnDef::new(Scores::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores::Table, Scores::HomeworkId)
                            .to(Homeworks::Table, Homeworks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scores::Table, Scores::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建播放记录表
        manager
            .create_table(
                Table::create()
                    .table(PlaybackStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlaybackStats::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlaybackStats::VideoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlaybackStats::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlaybackStats::Progress).integer().not_null())
                    .col(ColumnDef::new(PlaybackStats::Duration).integer().not_null())
                    .col(
                        ColumnDef::new(PlaybackStats::LastPlayedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PlaybackStats::Table, PlaybackStats::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PlaybackStats::Table, PlaybackStats::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建收藏关联表
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCollections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoriteCollections::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FavoriteCollections::CollectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FavoriteCollections::UserId)
                            .col(FavoriteCollections::CollectionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoriteCollections::Table, FavoriteCollections::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                FavoriteCollections::Table,
                                FavoriteCollections::CollectionId,
                            )
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 播放记录：每个 (用户, 视频) 至多一条，upsert 依赖该唯一索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_playback_stats_user_video")
                    .table(PlaybackStats::Table)
                    .col(PlaybackStats::UserId)
                    .col(PlaybackStats::VideoId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_categories_collection_id")
                    .table(Categories::Table)
                    .col(Categories::CollectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_videos_category_id")
                    .table(Videos::Table)
                    .col(Videos::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_questions_homework_id")
                    .table(Questions::Table)
                    .col(Questions::HomeworkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scores_homework_user")
                    .table(Scores::Table)
                    .col(Scores::HomeworkId)
                    .col(Scores::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(FavoriteCollections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlaybackStats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Homeworks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Videos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Collections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Collections {
    #[sea_orm(iden = "collections")]
    Table,
    Id,
    Name,
    Description,
    CreatorId,
    Thumbnail,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    CollectionId,
    Name,
    Progress,
}

#[derive(DeriveIden)]
enum Videos {
    #[sea_orm(iden = "videos")]
    Table,
    Id,
    CategoryId,
    Title,
    Description,
    Url,
    Duration,
    Thumbnail,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Materials {
    #[sea_orm(iden = "materials")]
    Table,
    Id,
    CategoryId,
    Title,
    Description,
    Url,
    Date,
}

#[derive(DeriveIden)]
enum Homeworks {
    #[sea_orm(iden = "homeworks")]
    Table,
    Id,
    CategoryId,
    Title,
    Description,
    Deadline,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    HomeworkId,
    QuestionType,
    Content,
    Options,
    Score,
}

#[derive(DeriveIden)]
enum Scores {
    #[sea_orm(iden = "scores")]
    Table,
    Id,
    HomeworkId,
    UserId,
    Score,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum PlaybackStats {
    #[sea_orm(iden = "playback_stats")]
    Table,
    Id,
    VideoId,
    UserId,
    Progress,
    Duration,
    LastPlayedAt,
}

#[derive(DeriveIden)]
enum FavoriteCollections {
    #[sea_orm(iden = "favorite_collections")]
    Table,
    UserId,
    CollectionId,
}
