use std::collections::HashMap;
use std::sync::Arc;

use crate::comments::{CommentRepository, DetailComment};
use crate::db::models::{CommentRow, ReplyRow, ThreadRow};
use crate::error::AppResult;
use crate::replies::{DetailReply, ReplyRepository};
use crate::threads::{DetailThread, ThreadRepository};

/// Builds the nested detail view of a thread from three independent reads.
pub struct GetThread {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    replies: Arc<dyn ReplyRepository>,
}

impl GetThread {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            threads,
            comments,
            replies,
        }
    }

    pub async fn execute(&self, thread_id: &str) -> AppResult<DetailThread> {
        let thread = self.threads.get_thread_by_id(thread_id).await?;
        let comments = self.comments.get_comments_by_thread_id(thread_id).await?;
        // One fetch for the whole thread, grouped below.
        let replies = self.replies.get_replies_by_thread_id(thread_id).await?;

        tracing::debug!(
            "Assembling {} with {} comments and {} replies",
            thread_id,
            comments.len(),
            replies.len()
        );
        Ok(assemble(thread, comments, replies))
    }
}

/// Nests replies under their comment. Both lists keep the order they were
/// fetched in. Masking happens inside the Detail constructors.
fn assemble(thread: ThreadRow, comments: Vec<CommentRow>, replies: Vec<ReplyRow>) -> DetailThread {
    let mut by_comment: HashMap<String, Vec<DetailReply>> = HashMap::new();
    for row in replies {
        let reply = DetailReply::new(row);
        by_comment
            .entry(reply.comment_id.clone())
            .or_default()
            .push(reply);
    }

    let comments = comments
        .into_iter()
        .map(|row| {
            let replies = by_comment.remove(&row.id).unwrap_or_default();
            DetailComment::new(row, replies)
        })
        .collect();

    DetailThread::new(thread, comments)
}
