// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str = "id, title, body, author_id, created_at, updated_at";
const MAX_PAGE: u32 = 100;

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article::new(
            ArticleId::new(row.id)?,
            ArticleTitle::new(row.title)?,
            ArticleBody::new(row.body)?,
            UserId::new(row.author_id)?,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            author_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, body, author_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            body,
            author_id,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(author_id) = author_id {
            builder.push(", author_id = ");
            builder.push_bind(i64::from(author_id));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl SqliteArticleReadRepository {
    async fn fetch(&self, author_id: Option<UserId>, limit: u32) -> DomainResult<Vec<Article>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let limit = limit.min(MAX_PAGE);

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles");
        if let Some(author_id) = author_id {
            builder.push(" WHERE author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Article>> {
        self.fetch(None, limit).await
    }

    async fn list_by_author(&self, author_id: UserId, limit: u32) -> DomainResult<Vec<Article>> {
        self.fetch(Some(author_id), limit).await
    }
}
