// src/domain/article/entity.rs
use crate::domain::article::attributes::ArticleAttributes;
use crate::domain::article::likes::LikedBy;
use crate::domain::article::relations::{AuthorRelation, LikedByRelation};
use crate::domain::article::repository::ArticleLikeRepository;
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    likes: Option<LikedBy>,
}

impl Article {
    pub fn new(
        id: ArticleId,
        title: ArticleTitle,
        body: ArticleBody,
        author_id: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            body,
            author_id,
            created_at,
            updated_at,
            likes: None,
        }
    }

    pub fn author(&self) -> AuthorRelation {
        AuthorRelation::new(self.author_id)
    }

    pub fn liked_by(&self) -> LikedByRelation {
        LikedByRelation::new(self.id)
    }

    /// The cached liked-by snapshot, if it has been loaded.
    pub fn likes(&self) -> Option<&LikedBy> {
        self.likes.as_ref()
    }

    pub fn with_likes(mut self, likes: LikedBy) -> Self {
        self.likes = Some(likes);
        self
    }

    pub fn forget_likes(&mut self) {
        self.likes = None;
    }

    /// Resolves the liked-by snapshot on first use and reuses it afterwards.
    pub async fn load_likes(
        &mut self,
        repo: &dyn ArticleLikeRepository,
    ) -> DomainResult<&LikedBy> {
        let likes = match self.likes.take() {
            Some(likes) => likes,
            None => self.liked_by().get(repo).await?,
        };
        Ok(&*self.likes.insert(likes))
    }

    /// An absent user never liked anything and costs no lookup.
    pub async fn is_liked_by(
        &mut self,
        user: Option<&User>,
        repo: &dyn ArticleLikeRepository,
    ) -> DomainResult<bool> {
        let Some(user) = user else {
            return Ok(false);
        };
        Ok(self.load_likes(repo).await?.contains(user.id))
    }

    pub async fn like_count(&mut self, repo: &dyn ArticleLikeRepository) -> DomainResult<usize> {
        Ok(self.load_likes(repo).await?.count())
    }

    pub fn fill(&mut self, attributes: ArticleAttributes, now: DateTime<Utc>) -> DomainResult<()> {
        let (title, body) = attributes.merge_into(&self.title, &self.body)?;
        self.title = title;
        self.body = body;
        self.updated_at = now;
        Ok(())
    }

    pub fn reassign_author(&mut self, author_id: UserId, now: DateTime<Utc>) {
        self.author_id = author_id;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn from_attributes(
        attributes: ArticleAttributes,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let (title, body) = attributes.into_values()?;
        Ok(Self {
            title,
            body,
            author_id,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub body: Option<ArticleBody>,
    pub author_id: Option<UserId>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            author_id: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_author(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }
}
