pub mod attributes;
pub mod entity;
pub mod likes;
pub mod relations;
pub mod repository;
pub mod value_objects;

pub use attributes::ArticleAttributes;
pub use entity::{Article, ArticleUpdate, NewArticle};
pub use likes::{LikePivot, LikedBy, Liker};
pub use relations::{AuthorRelation, LikedByRelation};
pub use repository::{ArticleLikeRepository, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle};
