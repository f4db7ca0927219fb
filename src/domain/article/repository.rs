use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::likes::LikedBy;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Newest first.
    async fn list(&self, limit: u32) -> DomainResult<Vec<Article>>;
    async fn list_by_author(&self, author_id: UserId, limit: u32) -> DomainResult<Vec<Article>>;
}

/// Store for the article/user join relation.
///
/// Implementations must keep each (article, user) pair unique; `like` on an
/// existing pair is a no-op that returns `false`.
#[async_trait]
pub trait ArticleLikeRepository: Send + Sync {
    async fn like(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool>;
    async fn unlike(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool>;
    async fn liked_by(&self, article_id: ArticleId) -> DomainResult<LikedBy>;
    /// Articles without likes map to an empty snapshot.
    async fn liked_by_many(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, LikedBy>>;
    async fn count(&self, article_id: ArticleId) -> DomainResult<u64>;
    async fn exists(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool>;
}
