pub mod comment_ops;
pub mod follower_ops;
pub mod media_ops;
pub mod post_ops;
pub mod store;
pub mod user_ops;

pub use store::Store;
