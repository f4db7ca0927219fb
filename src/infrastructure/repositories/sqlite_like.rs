// src/infrastructure/repositories/sqlite_like.rs
use super::map_sqlx;
use crate::domain::article::{ArticleId, ArticleLikeRepository, LikePivot, LikedBy, Liker};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

#[derive(Clone)]
pub struct SqliteArticleLikeRepository {
    pool: SqlitePool,
}

impl SqliteArticleLikeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const LIKER_SELECT: &str = "SELECT l.article_id, u.id AS user_id, u.username, \
     u.created_at AS user_created_at, l.created_at AS liked_at, l.updated_at AS like_updated_at \
     FROM likes l JOIN users u ON u.id = l.user_id";

#[derive(Debug, FromRow)]
struct LikerRow {
    article_id: i64,
    user_id: i64,
    username: String,
    user_created_at: DateTime<Utc>,
    liked_at: DateTime<Utc>,
    like_updated_at: DateTime<Utc>,
}

impl LikerRow {
    fn into_parts(self) -> DomainResult<(ArticleId, Liker)> {
        let liker = Liker {
            user: User {
                id: UserId::new(self.user_id)?,
                username: Username::from_stored(self.username),
                created_at: self.user_created_at,
            },
            pivot: LikePivot {
                created_at: self.liked_at,
                updated_at: self.like_updated_at,
            },
        };
        Ok((ArticleId::new(self.article_id)?, liker))
    }
}

#[async_trait]
impl ArticleLikeRepository for SqliteArticleLikeRepository {
    async fn like(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO likes (article_id, user_id, created_at, updated_at) VALUES (?, ?, ?, ?)
             ON CONFLICT (article_id, user_id) DO NOTHING",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .bind(at)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            tracing::debug!(%article_id, %user_id, "like recorded");
        } else {
            tracing::debug!(%article_id, %user_id, "like already present");
        }
        Ok(inserted)
    }

    async fn unlike(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE article_id = ? AND user_id = ?")
            .bind(i64::from(article_id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn liked_by(&self, article_id: ArticleId) -> DomainResult<LikedBy> {
        let rows = sqlx::query_as::<_, LikerRow>(&format!(
            "{LIKER_SELECT} WHERE l.article_id = ? ORDER BY l.created_at, l.rowid"
        ))
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let likers = rows
            .into_iter()
            .map(|row| row.into_parts().map(|(_, liker)| liker))
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(LikedBy::new(likers))
    }

    async fn liked_by_many(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, LikedBy>> {
        if article_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(LIKER_SELECT);
        builder.push(" WHERE l.article_id IN (");
        let mut separated = builder.separated(", ");
        for id in article_ids {
            separated.push_bind(i64::from(*id));
        }
        separated.push_unseparated(")");
        builder.push(" ORDER BY l.article_id, l.created_at, l.rowid");

        let rows = builder
            .build_query_as::<LikerRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut grouped: HashMap<ArticleId, Vec<Liker>> = article_ids
            .iter()
            .map(|id| (*id, Vec::new()))
            .collect();
        for row in rows {
            let (article_id, liker) = row.into_parts()?;
            grouped.entry(article_id).or_default().push(liker);
        }

        Ok(grouped
            .into_iter()
            .map(|(id, likers)| (id, LikedBy::new(likers)))
            .collect())
    }

    async fn count(&self, article_id: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM likes WHERE article_id = ?")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn exists(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE article_id = ? AND user_id = ?)",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map(|found| found != 0)
        .map_err(map_sqlx)
    }
}
