use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto, error::ApplicationResult, queries::articles::present_article,
    },
    domain::{
        article::{ArticleAttributes, ArticleUpdate},
        user::User,
    },
};
use serde_json::Value;

pub struct UpdateArticleCommand {
    pub id: i64,
    pub attributes: ArticleAttributes,
}

impl UpdateArticleCommand {
    pub fn from_json(id: i64, payload: Value) -> ApplicationResult<Self> {
        Ok(Self {
            id,
            attributes: ArticleAttributes::from_json(payload)?,
        })
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &User,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand { id, attributes } = command;
        let mut article = self.load_article(id).await?;

        if attributes.is_empty() {
            return present_article(article, Some(actor), self.like_repo.as_ref()).await;
        }

        let now = self.clock.now();
        article.fill(attributes, now)?;

        let update = ArticleUpdate::new(article.id, article.updated_at)
            .with_title(article.title.clone())
            .with_body(article.body.clone());
        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, "article updated");

        present_article(updated, Some(actor), self.like_repo.as_ref()).await
    }
}
