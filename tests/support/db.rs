// tests/support/db.rs
use std::sync::Arc;

use article_likes::application::{ports::time::Clock, services::ApplicationServices};
use article_likes::domain::article::{
    ArticleLikeRepository, ArticleReadRepository, ArticleWriteRepository,
};
use article_likes::domain::user::UserRepository;
use article_likes::infrastructure::{
    database,
    repositories::{
        SqliteArticleLikeRepository, SqliteArticleReadRepository, SqliteArticleWriteRepository,
        SqliteUserRepository,
    },
};
use sqlx::SqlitePool;

use super::clock::TickingClock;

pub async fn setup_test_db() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to connect to test database");

    database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub struct TestContext {
    pub pool: SqlitePool,
    pub users: Arc<dyn UserRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub likes: Arc<dyn ArticleLikeRepository>,
    pub clock: Arc<dyn Clock>,
    pub services: ApplicationServices,
}

impl TestContext {
    pub async fn new() -> Self {
        let pool = setup_test_db().await;

        let users: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
        let article_write: Arc<dyn ArticleWriteRepository> =
            Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
        let article_read: Arc<dyn ArticleReadRepository> =
            Arc::new(SqliteArticleReadRepository::new(pool.clone()));
        let likes: Arc<dyn ArticleLikeRepository> =
            Arc::new(SqliteArticleLikeRepository::new(pool.clone()));
        let clock: Arc<dyn Clock> = Arc::new(TickingClock::default());

        let services = ApplicationServices::new(
            Arc::clone(&users),
            Arc::clone(&article_write),
            Arc::clone(&article_read),
            Arc::clone(&likes),
            Arc::clone(&clock),
        );

        Self {
            pool,
            users,
            article_write,
            article_read,
            likes,
            clock,
            services,
        }
    }
}
