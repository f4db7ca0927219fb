pub mod articles;
pub mod users;

pub use articles::{ArticleDto, LikerDto};
pub use users::UserDto;
