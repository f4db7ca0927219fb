mod get;
mod likers;
mod list;
mod service;
mod view;

pub use get::GetArticleQuery;
pub use likers::ListLikersQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
pub(crate) use view::present_article;
