use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use crate::comments::domain::{AddedComment, NewComment};
use crate::db::models::CommentRow;
use crate::db::timestamp;
use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::state::DbPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, new_comment: &NewComment) -> AppResult<AddedComment>;

    /// Every comment of the thread, deleted ones included, oldest first.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> AppResult<Vec<CommentRow>>;

    /// `NotFound` unless the comment exists within the given thread.
    async fn verify_comment_exists(&self, comment_id: &str, thread_id: &str) -> AppResult<()>;

    /// `Forbidden` unless `owner` created the comment.
    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> AppResult<()>;

    /// Soft delete: flags the row, keeps it.
    async fn delete_comment_by_id(&self, comment_id: &str) -> AppResult<()>;
}

pub struct SqliteCommentRepository {
    pool: DbPool,
    ids: Arc<dyn IdGenerator>,
}

impl SqliteCommentRepository {
    pub fn new(pool: DbPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

fn comment_not_found() -> AppError {
    AppError::NotFound("comment not found".to_string())
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn add_comment(&self, new_comment: &NewComment) -> AppResult<AddedComment> {
        let conn = self.pool.get()?;
        let id = format!("comment-{}", self.ids.generate());

        conn.execute(
            "INSERT INTO comments (id, content, owner, thread_id, date) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                new_comment.content,
                new_comment.owner,
                new_comment.thread_id,
                timestamp()
            ],
        )?;

        tracing::info!("Comment {} added to {}", id, new_comment.thread_id);
        Ok(AddedComment {
            id,
            content: new_comment.content.clone(),
            owner: new_comment.owner.clone(),
        })
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> AppResult<Vec<CommentRow>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT c.id, u.username, c.date, c.content, c.is_deleted
             FROM comments c
             JOIN users u ON u.id = c.owner
             WHERE c.thread_id = ?1
             ORDER BY c.date ASC, c.rowid ASC",
        )?;

        let comments = stmt
            .query_map(params![thread_id], |row| {
                Ok(CommentRow {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    date: row.get(2)?,
                    content: row.get(3)?,
                    is_deleted: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(comments)
    }

    async fn verify_comment_exists(&self, comment_id: &str, thread_id: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        let exists: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM comments WHERE id = ?1 AND thread_id = ?2",
            params![comment_id, thread_id],
            |row| row.get(0),
        )?;

        if exists {
            Ok(())
        } else {
            Err(comment_not_found())
        }
    }

    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        let stored_owner: String = conn
            .query_row(
                "SELECT owner FROM comments WHERE id = ?1",
                params![comment_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(comment_not_found)?;

        if stored_owner != owner {
            return Err(AppError::Forbidden(
                "you are not allowed to delete this comment".to_string(),
            ));
        }
        Ok(())
    }

    async fn delete_comment_by_id(&self, comment_id: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows = conn.execute(
            "UPDATE comments SET is_deleted = 1 WHERE id = ?1",
            params![comment_id],
        )?;

        if rows == 0 {
            return Err(comment_not_found());
        }
        tracing::info!("Comment {} soft-deleted", comment_id);
        Ok(())
    }
}
