// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use article_likes::domain::article::{ArticleId, ArticleLikeRepository, LikePivot, LikedBy, Liker};
use article_likes::domain::errors::{DomainError, DomainResult};
use article_likes::domain::user::{User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// In-memory join table that records how often it is read.
#[derive(Default)]
pub struct CountingLikeRepo {
    users: Mutex<HashMap<UserId, User>>,
    rows: Mutex<Vec<(ArticleId, Liker)>>,
    reads: AtomicUsize,
}

impl CountingLikeRepo {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn register(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    fn liker(user: User, at: DateTime<Utc>) -> Liker {
        Liker {
            user,
            pivot: LikePivot {
                created_at: at,
                updated_at: at,
            },
        }
    }

    /// Seeds a row without the uniqueness check a real store would apply.
    pub fn push_raw(&self, article_id: ArticleId, user: User, at: DateTime<Utc>) {
        self.rows
            .lock()
            .unwrap()
            .push((article_id, Self::liker(user, at)));
    }

    fn snapshot(&self, article_id: ArticleId) -> LikedBy {
        let rows = self.rows.lock().unwrap();
        LikedBy::new(
            rows.iter()
                .filter(|(id, _)| *id == article_id)
                .map(|(_, liker)| liker.clone())
                .collect(),
        )
    }
}

#[async_trait]
impl ArticleLikeRepository for CountingLikeRepo {
    async fn like(
        &self,
        article_id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let user = self
            .users
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or_else(|| DomainError::Conflict("referenced record is missing".into()))?;

        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|(id, liker)| *id == article_id && liker.user.id == user_id)
        {
            return Ok(false);
        }
        rows.push((article_id, Self::liker(user, at)));
        Ok(true)
    }

    async fn unlike(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(id, liker)| !(*id == article_id && liker.user.id == user_id));
        Ok(rows.len() != before)
    }

    async fn liked_by(&self, article_id: ArticleId) -> DomainResult<LikedBy> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot(article_id))
    }

    async fn liked_by_many(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, LikedBy>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(article_ids
            .iter()
            .map(|id| (*id, self.snapshot(*id)))
            .collect())
    }

    async fn count(&self, article_id: ArticleId) -> DomainResult<u64> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot(article_id).count() as u64)
    }

    async fn exists(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot(article_id).contains(user_id))
    }
}
