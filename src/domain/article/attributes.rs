// src/domain/article/attributes.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use serde::Deserialize;
use serde_json::Value;

/// The bulk-assignable subset of an article.
///
/// Only `title` and `body` can be filled in one go. Any other key in a
/// deserialised payload (`id`, `author_id`, timestamps, ...) is dropped on the
/// floor, so identity and ownership can only be set through dedicated calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ArticleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn from_json(value: Value) -> DomainResult<Self> {
        serde_json::from_value(value)
            .map_err(|err| DomainError::Validation(format!("invalid article attributes: {err}")))
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }

    /// Values for a brand new article; both keys are required.
    pub fn into_values(self) -> DomainResult<(ArticleTitle, ArticleBody)> {
        let title = self
            .title
            .ok_or_else(|| DomainError::Validation("title is required".into()))?;
        let body = self
            .body
            .ok_or_else(|| DomainError::Validation("body is required".into()))?;
        Ok((ArticleTitle::new(title)?, ArticleBody::new(body)?))
    }

    /// Overlays the present keys on top of existing content.
    pub fn merge_into(
        self,
        title: &ArticleTitle,
        body: &ArticleBody,
    ) -> DomainResult<(ArticleTitle, ArticleBody)> {
        let title = match self.title {
            Some(value) => ArticleTitle::new(value)?,
            None => title.clone(),
        };
        let body = match self.body {
            Some(value) => ArticleBody::new(value)?,
            None => body.clone(),
        };
        Ok((title, body))
    }
}
