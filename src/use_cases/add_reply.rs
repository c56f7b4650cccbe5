use std::sync::Arc;

use serde_json::Value;

use crate::comments::CommentRepository;
use crate::error::AppResult;
use crate::replies::{AddedReply, NewReply, ReplyRepository};

pub struct AddReply {
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl AddReply {
    pub fn new(comments: Arc<dyn CommentRepository>, replies: Arc<dyn ReplyRepository>) -> Self {
        Self { comments, replies }
    }

    pub async fn execute(
        &self,
        payload: &Value,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> AppResult<AddedReply> {
        self.comments
            .verify_comment_exists(comment_id, thread_id)
            .await?;
        let new_reply = NewReply::from_payload(payload, owner, comment_id)?;
        self.replies.add_reply(&new_reply).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::repository::MockCommentRepository;
    use crate::error::AppError;
    use crate::replies::repository::MockReplyRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_reply_to_existing_comment() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_comment_exists()
            .withf(|comment_id: &str, thread_id: &str| {
                comment_id == "comment-123" && thread_id == "thread-123"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut replies = MockReplyRepository::new();
        replies
            .expect_add_reply()
            .withf(|r: &NewReply| {
                r.content == "a reply content" && r.owner == "user-123" && r.comment_id == "comment-123"
            })
            .times(1)
            .returning(|r| {
                Ok(AddedReply {
                    id: "reply-123".into(),
                    content: r.content.clone(),
                    owner: r.owner.clone(),
                })
            });

        let use_case = AddReply::new(Arc::new(comments), Arc::new(replies));
        let added = use_case
            .execute(
                &json!({ "content": "a reply content" }),
                "thread-123",
                "comment-123",
                "user-123",
            )
            .await
            .unwrap();

        assert_eq!(
            added,
            AddedReply {
                id: "reply-123".into(),
                content: "a reply content".into(),
                owner: "user-123".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_add_reply_to_missing_comment() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_verify_comment_exists()
            .times(1)
            .returning(|_, _| Err(AppError::NotFound("comment not found".into())));
        let mut replies = MockReplyRepository::new();
        replies.expect_add_reply().times(0);

        let use_case = AddReply::new(Arc::new(comments), Arc::new(replies));
        let result = use_case
            .execute(
                &json!({ "content": "a reply content" }),
                "thread-123",
                "comment-404",
                "user-123",
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
