use super::ArticleQueryService;
use crate::{
    application::{
        dto::LikerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct ListLikersQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    pub async fn list_likers(&self, query: ListLikersQuery) -> ApplicationResult<Vec<LikerDto>> {
        let id = ArticleId::new(query.article_id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let likers = article.load_likes(self.like_repo.as_ref()).await?;
        Ok(likers.iter().cloned().map(LikerDto::from).collect())
    }
}
