pub mod domain;
pub mod repository;

pub use domain::{AddedReply, DetailReply, NewReply};
pub use repository::{ReplyRepository, SqliteReplyRepository};
