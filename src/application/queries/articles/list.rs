// src/application/queries/articles/list.rs
use super::{ArticleQueryService, present_article};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::ArticleId,
        user::{User, UserId},
    },
};

const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub author_id: Option<i64>,
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    /// Likes for the whole page come from a single batch lookup.
    pub async fn list_articles(
        &self,
        viewer: Option<&User>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        let articles = match query.author_id {
            Some(author_id) => {
                self.read_repo
                    .list_by_author(UserId::new(author_id)?, limit)
                    .await?
            }
            None => self.read_repo.list(limit).await?,
        };

        let ids: Vec<ArticleId> = articles.iter().map(|article| article.id).collect();
        let mut likes = self.like_repo.liked_by_many(&ids).await?;

        let mut page = Vec::with_capacity(articles.len());
        for article in articles {
            let snapshot = likes.remove(&article.id).unwrap_or_default();
            let article = article.with_likes(snapshot);
            page.push(present_article(article, viewer, self.like_repo.as_ref()).await?);
        }

        Ok(page)
    }
}
