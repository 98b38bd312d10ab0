//! 预导入模块，方便使用

pub use super::categories::{
    ActiveModel as CategoryActiveModel, Entity as Categories, Model as CategoryModel,
};
pub use super::collections::{
    ActiveModel as CollectionActiveModel, Entity as Collections, Model as CollectionModel,
};
pub use super::favorite_collections::{
    ActiveModel as FavoriteCollectionActiveModel, Entity as FavoriteCollections,
    Model as FavoriteCollectionModel,
};
pub use super::homeworks::{
    ActiveModel as HomeworkActiveModel, Entity as Homeworks, Model as HomeworkModel,
};
pub use super::materials::{
    ActiveModel as MaterialActiveModel, Entity as Materials, Model as MaterialModel,
};
pub use super::playback_stats::{
    ActiveModel as PlaybackStatActiveModel, Entity as PlaybackStats, Model as PlaybackStatModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::scores::{ActiveModel as ScoreActiveModel, Entity as Scores, Model as ScoreModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::videos::{ActiveModel as VideoActiveModel, Entity as Videos, Model as VideoModel};
