use std::sync::Arc;

use crate::comments::CommentRepository;
use crate::error::AppResult;

pub struct DeleteComment {
    comments: Arc<dyn CommentRepository>,
}

impl DeleteComment {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    /// Existence, then ownership, then the soft delete.
    pub async fn execute(&self, thread_id: &str, comment_id: &str, owner: &str) -> AppResult<()> {
        self.comments
            .verify_comment_exists(comment_id, thread_id)
            .await?;
        self.comments
            .verify_comment_access(comment_id, owner)
            .await?;
        self.comments.delete_comment_by_id(comment_id).await
    }
}
