// Thread entities - immutable once built
use serde::Serialize;
use serde_json::Value;

use crate::comments::DetailComment;
use crate::db::models::ThreadRow;
use crate::validation::{require_non_empty, EntityKind, Payload, ValidationError};

/// A thread about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl NewThread {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let (title, body, owner) = (title.into(), body.into(), owner.into());
        require_non_empty(EntityKind::NewThread, &[&title, &body, &owner])?;
        Ok(Self { title, body, owner })
    }

    /// Builds from a request body carrying `title` and `body`; `owner` is the caller.
    pub fn from_payload(payload: &Value, owner: &str) -> Result<Self, ValidationError> {
        let payload = Payload::new(EntityKind::NewThread, payload)?;
        payload.require(&["title", "body"])?;
        Self::new(payload.string("title")?, payload.string("body")?, owner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// The full read model of a thread with its comments and their replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<DetailComment>,
}

impl DetailThread {
    pub fn new(row: ThreadRow, comments: Vec<DetailComment>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            date: row.date,
            username: row.username,
            comments,
        }
    }
}
