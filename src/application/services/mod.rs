// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::articles::ArticleCommandService,
        error::ApplicationError,
        ports::time::Clock,
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleLikeRepository, ArticleReadRepository, ArticleWriteRepository},
        user::{NewUser, User, UserId, UserRepository, Username},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_like_repo: Arc<dyn ArticleLikeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&article_like_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_like_repo),
        ));

        Self {
            article_commands,
            article_queries,
            user_repo,
            clock,
        }
    }

    /// Users live outside this crate's model; this only seeds them so articles
    /// have somebody to belong to.
    pub async fn register_user(&self, username: &str) -> ApplicationResult<User> {
        let username = Username::new(username)?;
        let user = self
            .user_repo
            .insert(NewUser::new(username, self.clock.now()))
            .await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    pub async fn find_user(&self, id: i64) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(UserId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
