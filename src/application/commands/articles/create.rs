// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        queries::articles::present_article,
    },
    domain::{
        article::{ArticleAttributes, LikedBy, NewArticle},
        user::User,
    },
};
use serde_json::Value;

pub struct CreateArticleCommand {
    pub attributes: ArticleAttributes,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }

    /// Bulk construction from an untrusted payload; only `title` and `body` are read.
    pub fn from_json(payload: Value) -> ApplicationResult<Self> {
        Ok(Self {
            attributes: ArticleAttributes::from_json(payload)?,
        })
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> ApplicationResult<CreateArticleCommand> {
        let title = self
            .title
            .ok_or_else(|| ApplicationError::validation("title is required"))?;
        let body = self
            .body
            .ok_or_else(|| ApplicationError::validation("body is required"))?;
        Ok(CreateArticleCommand {
            attributes: ArticleAttributes::new().title(title).body(body),
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        author: &User,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        let new_article = NewArticle::from_attributes(command.attributes, author.id, now)?;

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, author_id = %author.id, "article created");

        // Nobody can have liked an article that did not exist a moment ago.
        let created = created.with_likes(LikedBy::default());
        present_article(created, Some(author), self.like_repo.as_ref()).await
    }
}
