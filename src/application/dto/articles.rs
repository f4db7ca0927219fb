use crate::domain::article::{Article, Liker};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserDto;

/// Article as seen by one (possibly anonymous) viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub liked: bool,
    pub like_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_article(article: Article, liked: bool, like_count: usize) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            author_id: article.author_id.into(),
            liked,
            like_count,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikerDto {
    pub user: UserDto,
    pub liked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Liker> for LikerDto {
    fn from(liker: Liker) -> Self {
        Self {
            user: liker.user.into(),
            liked_at: liker.pivot.created_at,
            updated_at: liker.pivot.updated_at,
        }
    }
}
