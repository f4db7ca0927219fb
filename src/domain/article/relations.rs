// src/domain/article/relations.rs
use crate::domain::article::likes::LikedBy;
use crate::domain::article::repository::ArticleLikeRepository;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId, UserRepository};
use chrono::{DateTime, Utc};

/// Many-to-one link from an article to the user who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorRelation {
    author_id: UserId,
}

impl AuthorRelation {
    pub(crate) fn new(author_id: UserId) -> Self {
        Self { author_id }
    }

    pub fn id(&self) -> UserId {
        self.author_id
    }

    pub async fn resolve(&self, users: &dyn UserRepository) -> DomainResult<User> {
        users
            .find_by_id(self.author_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("author {} not found", self.author_id)))
    }
}

/// Many-to-many link from an article to the users who liked it.
///
/// Every call goes to the store. Use `Article::load_likes` for the cached
/// snapshot instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikedByRelation {
    article_id: ArticleId,
}

impl LikedByRelation {
    pub(crate) fn new(article_id: ArticleId) -> Self {
        Self { article_id }
    }

    pub fn article_id(&self) -> ArticleId {
        self.article_id
    }

    pub async fn get(&self, likes: &dyn ArticleLikeRepository) -> DomainResult<LikedBy> {
        likes.liked_by(self.article_id).await
    }

    pub async fn count(&self, likes: &dyn ArticleLikeRepository) -> DomainResult<u64> {
        likes.count(self.article_id).await
    }

    pub async fn contains(
        &self,
        likes: &dyn ArticleLikeRepository,
        user_id: UserId,
    ) -> DomainResult<bool> {
        likes.exists(self.article_id, user_id).await
    }

    /// Returns `false` when the pair was already present.
    pub async fn attach(
        &self,
        likes: &dyn ArticleLikeRepository,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        likes.like(self.article_id, user_id, at).await
    }

    pub async fn detach(
        &self,
        likes: &dyn ArticleLikeRepository,
        user_id: UserId,
    ) -> DomainResult<bool> {
        likes.unlike(self.article_id, user_id).await
    }
}
