// Comment entities - immutable once built
use serde::Serialize;
use serde_json::Value;

use crate::db::models::CommentRow;
use crate::masking::{mask, DELETED_COMMENT_CONTENT};
use crate::replies::DetailReply;
use crate::validation::{require_non_empty, EntityKind, Payload, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub owner: String,
    pub thread_id: String,
}

impl NewComment {
    pub fn new(
        content: impl Into<String>,
        owner: impl Into<String>,
        thread_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (content, owner, thread_id) = (content.into(), owner.into(), thread_id.into());
        require_non_empty(EntityKind::NewComment, &[&content, &owner, &thread_id])?;
        Ok(Self {
            content,
            owner,
            thread_id,
        })
    }

    pub fn from_payload(
        payload: &Value,
        owner: &str,
        thread_id: &str,
    ) -> Result<Self, ValidationError> {
        let payload = Payload::new(EntityKind::NewComment, payload)?;
        payload.require(&["content"])?;
        Self::new(payload.string("content")?, owner, thread_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A comment as shown inside a thread. Content is already masked when the
/// comment was deleted; `is_deleted` is kept for callers but never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailComment {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<DetailReply>,
    #[serde(skip)]
    pub is_deleted: bool,
}

impl DetailComment {
    pub fn new(row: CommentRow, replies: Vec<DetailReply>) -> Self {
        Self {
            id: row.id,
            username: row.username,
            date: row.date,
            content: mask(row.content, row.is_deleted, DELETED_COMMENT_CONTENT),
            replies,
            is_deleted: row.is_deleted,
        }
    }
}
