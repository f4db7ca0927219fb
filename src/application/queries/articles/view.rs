use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{Article, ArticleLikeRepository},
        user::User,
    },
};

/// Renders an article for `viewer`, loading its likes at most once.
pub(crate) async fn present_article(
    mut article: Article,
    viewer: Option<&User>,
    likes: &dyn ArticleLikeRepository,
) -> ApplicationResult<ArticleDto> {
    let liked = article.is_liked_by(viewer, likes).await?;
    let like_count = article.like_count(likes).await?;
    Ok(ArticleDto::from_article(article, liked, like_count))
}
