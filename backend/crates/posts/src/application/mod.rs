pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod list_posts;
pub mod update_post;

pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use get_post::GetPostUseCase;
pub use list_posts::{HTML_LIST_LIMIT, ListPostsUseCase};
pub use update_post::{UpdateMode, UpdatePostInput, UpdatePostUseCase};
