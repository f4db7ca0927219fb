use std::sync::Arc;

use crate::domain::article::{ArticleLikeRepository, ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) like_repo: Arc<dyn ArticleLikeRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        like_repo: Arc<dyn ArticleLikeRepository>,
    ) -> Self {
        Self {
            read_repo,
            like_repo,
        }
    }
}
