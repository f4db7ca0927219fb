// src/application/commands/articles/like.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto, error::ApplicationResult, queries::articles::present_article,
    },
    domain::user::User,
};

pub struct LikeArticleCommand {
    pub article_id: i64,
}

impl ArticleCommandService {
    /// Liking twice is the same as liking once.
    pub async fn like_article(
        &self,
        actor: &User,
        command: LikeArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_article(command.article_id).await?;
        let created = article
            .liked_by()
            .attach(self.like_repo.as_ref(), actor.id, self.clock.now())
            .await
            .inspect_err(|err| {
                tracing::warn!(
                    article_id = %article.id,
                    user_id = %actor.id,
                    error = %err,
                    "like failed"
                );
            })?;

        if !created {
            tracing::debug!(
                article_id = %article.id,
                user_id = %actor.id,
                "duplicate like ignored"
            );
        }

        present_article(article, Some(actor), self.like_repo.as_ref()).await
    }

    pub async fn unlike_article(
        &self,
        actor: &User,
        command: LikeArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_article(command.article_id).await?;
        let removed = article
            .liked_by()
            .detach(self.like_repo.as_ref(), actor.id)
            .await?;

        if !removed {
            tracing::debug!(article_id = %article.id, user_id = %actor.id, "nothing to unlike");
        }

        present_article(article, Some(actor), self.like_repo.as_ref()).await
    }
}
