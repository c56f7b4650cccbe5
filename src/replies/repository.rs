use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use crate::db::models::ReplyRow;
use crate::db::timestamp;
use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::replies::domain::{AddedReply, NewReply};
use crate::state::DbPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, new_reply: &NewReply) -> AppResult<AddedReply>;

    /// Replies to every comment of the thread in one query, oldest first.
    async fn get_replies_by_thread_id(&self, thread_id: &str) -> AppResult<Vec<ReplyRow>>;

    async fn verify_reply_exists(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> AppResult<()>;

    async fn verify_reply_access(&self, reply_id: &str, owner: &str) -> AppResult<()>;

    async fn delete_reply_by_id(&self, reply_id: &str) -> AppResult<()>;
}

pub struct SqliteReplyRepository {
    pool: DbPool,
    ids: Arc<dyn IdGenerator>,
}

impl SqliteReplyRepository {
    pub fn new(pool: DbPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

fn reply_not_found() -> AppError {
    AppError::NotFound("reply not found".to_string())
}

#[async_trait]
impl ReplyRepository for SqliteReplyRepository {
    async fn add_reply(&self, new_reply: &NewReply) -> AppResult<AddedReply> {
        let conn = self.pool.get()?;
        let id = format!("reply-{}", self.ids.generate());

        conn.execute(
            "INSERT INTO replies (id, content, owner, comment_id, date) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                new_reply.content,
                new_reply.owner,
                new_reply.comment_id,
                timestamp()
            ],
        )?;

        tracing::info!("Reply {} added to {}", id, new_reply.comment_id);
        Ok(AddedReply {
            id,
            content: new_reply.content.clone(),
            owner: new_reply.owner.clone(),
        })
    }

    async fn get_replies_by_thread_id(&self, thread_id: &str) -> AppResult<Vec<ReplyRow>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT r.id, r.comment_id, u.username, r.date, r.content, r.is_deleted
             FROM replies r
             JOIN comments c ON c.id = r.comment_id
             JOIN users u ON u.id = r.owner
             WHERE c.thread_id = ?1
             ORDER BY r.date ASC, r.rowid ASC",
        )?;

        let replies = stmt
            .query_map(params![thread_id], |row| {
                Ok(ReplyRow {
                    id: row.get(0)?,
                    comment_id: row.get(1)?,
                    username: row.get(2)?,
                    date: row.get(3)?,
                    content: row.get(4)?,
                    is_deleted: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(replies)
    }

    async fn verify_reply_exists(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> AppResult<()> {
        let conn = self.pool.get()?;

        let exists: bool = conn.query_row(
            "SELECT COUNT(*) > 0
             FROM replies r
             JOIN comments c ON c.id = r.comment_id
             WHERE r.id = ?1 AND r.comment_id = ?2 AND c.thread_id = ?3",
            params![reply_id, comment_id, thread_id],
            |row| row.get(0),
        )?;

        if exists {
            Ok(())
        } else {
            Err(reply_not_found())
        }
    }

    async fn verify_reply_access(&self, reply_id: &str, owner: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        let stored_owner: String = conn
            .query_row(
                "SELECT owner FROM replies WHERE id = ?1",
                params![reply_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(reply_not_found)?;

        if stored_owner != owner {
            return Err(AppError::Forbidden(
                "you are not allowed to delete this reply".to_string(),
            ));
        }
        Ok(())
    }

    async fn delete_reply_by_id(&self, reply_id: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows = conn.execute(
            "UPDATE replies SET is_deleted = 1 WHERE id = ?1",
            params![reply_id],
        )?;

        if rows == 0 {
            return Err(reply_not_found());
        }
        tracing::info!("Reply {} soft-deleted", reply_id);
        Ok(())
    }
}
