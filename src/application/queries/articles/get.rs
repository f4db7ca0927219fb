use super::{ArticleQueryService, present_article};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, user::User},
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article(
        &self,
        viewer: Option<&User>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        present_article(article, viewer, self.like_repo.as_ref()).await
    }
}
