// Reply entities - immutable once built
use serde::Serialize;
use serde_json::Value;

use crate::db::models::ReplyRow;
use crate::masking::{mask, DELETED_REPLY_CONTENT};
use crate::validation::{require_non_empty, EntityKind, Payload, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
    pub owner: String,
    pub comment_id: String,
}

impl NewReply {
    pub fn new(
        content: impl Into<String>,
        owner: impl Into<String>,
        comment_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (content, owner, comment_id) = (content.into(), owner.into(), comment_id.into());
        require_non_empty(EntityKind::NewReply, &[&content, &owner, &comment_id])?;
        Ok(Self {
            content,
            owner,
            comment_id,
        })
    }

    pub fn from_payload(
        payload: &Value,
        owner: &str,
        comment_id: &str,
    ) -> Result<Self, ValidationError> {
        let payload = Payload::new(EntityKind::NewReply, payload)?;
        payload.require(&["content"])?;
        Self::new(payload.string("content")?, owner, comment_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A reply as shown under its comment. `comment_id` is only used to nest
/// the reply during assembly and is not part of the serialized view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailReply {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
    #[serde(skip)]
    pub comment_id: String,
    #[serde(skip)]
    pub is_deleted: bool,
}

impl DetailReply {
    pub fn new(row: ReplyRow) -> Self {
        Self {
            id: row.id,
            content: mask(row.content, row.is_deleted, DELETED_REPLY_CONTENT),
            date: row.date,
            username: row.username,
            comment_id: row.comment_id,
            is_deleted: row.is_deleted,
        }
    }
}
