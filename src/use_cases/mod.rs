// Application layer: each use case orchestrates repository calls for one route
pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_thread;

use std::sync::Arc;

pub use add_comment::AddComment;
pub use add_reply::AddReply;
pub use add_thread::AddThread;
pub use delete_comment::DeleteComment;
pub use delete_reply::DeleteReply;
pub use get_thread::GetThread;

use crate::comments::{CommentRepository, SqliteCommentRepository};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::replies::{ReplyRepository, SqliteReplyRepository};
use crate::state::DbPool;
use crate::threads::{SqliteThreadRepository, ThreadRepository};

/// Every use case, wired once at startup and shared by the handlers.
pub struct UseCases {
    pub add_thread: AddThread,
    pub get_thread: GetThread,
    pub add_comment: AddComment,
    pub delete_comment: DeleteComment,
    pub add_reply: AddReply,
    pub delete_reply: DeleteReply,
}

impl UseCases {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            add_thread: AddThread::new(threads.clone()),
            get_thread: GetThread::new(threads.clone(), comments.clone(), replies.clone()),
            add_comment: AddComment::new(threads, comments.clone()),
            delete_comment: DeleteComment::new(comments.clone()),
            add_reply: AddReply::new(comments, replies.clone()),
            delete_reply: DeleteReply::new(replies),
        }
    }

    /// SQLite adapters sharing one pool and UUID v7 ids.
    pub fn sqlite(pool: DbPool) -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);
        Self::new(
            Arc::new(SqliteThreadRepository::new(pool.clone(), ids.clone())),
            Arc::new(SqliteCommentRepository::new(pool.clone(), ids.clone())),
            Arc::new(SqliteReplyRepository::new(pool, ids)),
        )
    }
}
