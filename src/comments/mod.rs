pub mod domain;
pub mod repository;

pub use domain::{AddedComment, DetailComment, NewComment};
pub use repository::{CommentRepository, SqliteCommentRepository};
