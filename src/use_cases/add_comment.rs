use std::sync::Arc;

use serde_json::Value;

use crate::comments::{AddedComment, CommentRepository, NewComment};
use crate::error::AppResult;
use crate::threads::ThreadRepository;

pub struct AddComment {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl AddComment {
    pub fn new(threads: Arc<dyn ThreadRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { threads, comments }
    }

    pub async fn execute(
        &self,
        payload: &Value,
        thread_id: &str,
        owner: &str,
    ) -> AppResult<AddedComment> {
        self.threads.verify_thread_exists(thread_id).await?;
        let new_comment = NewComment::from_payload(payload, owner, thread_id)?;
        self.comments.add_comment(&new_comment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::repository::MockCommentRepository;
    use crate::error::AppError;
    use crate::threads::repository::MockThreadRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_comment_to_existing_thread() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread_exists()
            .withf(|id: &str| id == "thread-123")
            .times(1)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepository::new();
        comments
            .expect_add_comment()
            .withf(|c: &NewComment| {
                c.content == "a comment content"
                    && c.owner == "user-123"
                    && c.thread_id == "thread-123"
            })
            .times(1)
            .returning(|c| {
                Ok(AddedComment {
                    id: "comment-123".into(),
                    content: c.content.clone(),
                    owner: c.owner.clone(),
                })
            });

        let use_case = AddComment::new(Arc::new(threads), Arc::new(comments));
        let added = use_case
            .execute(&json!({ "content": "a comment content" }), "thread-123", "user-123")
            .await
            .unwrap();

        assert_eq!(added.id, "comment-123");
        assert_eq!(added.content, "a comment content");
        assert_eq!(added.owner, "user-123");
    }

    #[tokio::test]
    async fn test_add_comment_to_missing_thread() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread_exists()
            .times(1)
            .returning(|_| Err(AppError::NotFound("thread not found".into())));
        let mut comments = MockCommentRepository::new();
        comments.expect_add_comment().times(0);

        let use_case = AddComment::new(Arc::new(threads), Arc::new(comments));
        let result = use_case
            .execute(&json!({ "content": "a comment content" }), "thread-404", "user-123")
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
