// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod like;
mod reassign;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use like::LikeArticleCommand;
pub use reassign::ReassignAuthorCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
