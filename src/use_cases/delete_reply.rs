use std::sync::Arc;

use crate::error::AppResult;
use crate::replies::ReplyRepository;

pub struct DeleteReply {
    replies: Arc<dyn ReplyRepository>,
}

impl DeleteReply {
    pub fn new(replies: Arc<dyn ReplyRepository>) -> Self {
        Self { replies }
    }

    pub async fn execute(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> AppResult<()> {
        self.replies
            .verify_reply_exists(thread_id, comment_id, reply_id)
            .await?;
        self.replies.verify_reply_access(reply_id, owner).await?;
        self.replies.delete_reply_by_id(reply_id).await
    }
}
