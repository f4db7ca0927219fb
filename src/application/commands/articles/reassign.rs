use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        queries::articles::present_article,
    },
    domain::{article::ArticleUpdate, user::UserId},
};

pub struct ReassignAuthorCommand {
    pub id: i64,
    pub author_id: i64,
}

impl ArticleCommandService {
    pub async fn reassign_author(
        &self,
        command: ReassignAuthorCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(command.id).await?;
        let author_id = UserId::new(command.author_id)?;

        let author = self
            .user_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        if article.author_id == author.id {
            return present_article(article, Some(&author), self.like_repo.as_ref()).await;
        }

        let previous = article.author_id;
        article.reassign_author(author.id, self.clock.now());

        let update =
            ArticleUpdate::new(article.id, article.updated_at).with_author(article.author_id);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            article_id = %updated.id,
            from = %previous,
            to = %updated.author_id,
            "article author reassigned"
        );

        present_article(updated, Some(&author), self.like_repo.as_ref()).await
    }
}
