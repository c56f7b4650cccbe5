// Repository pattern - isolates all database side effects
use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use crate::db::models::ThreadRow;
use crate::db::timestamp;
use crate::error::{AppError, AppResult};
use crate::ids::IdGenerator;
use crate::state::DbPool;
use crate::threads::domain::{AddedThread, NewThread};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, new_thread: &NewThread) -> AppResult<AddedThread>;

    /// Thread with its owner's username, or `NotFound`.
    async fn get_thread_by_id(&self, thread_id: &str) -> AppResult<ThreadRow>;

    async fn verify_thread_exists(&self, thread_id: &str) -> AppResult<()>;
}

pub struct SqliteThreadRepository {
    pool: DbPool,
    ids: Arc<dyn IdGenerator>,
}

impl SqliteThreadRepository {
    pub fn new(pool: DbPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

fn thread_not_found() -> AppError {
    AppError::NotFound("thread not found".to_string())
}

#[async_trait]
impl ThreadRepository for SqliteThreadRepository {
    async fn add_thread(&self, new_thread: &NewThread) -> AppResult<AddedThread> {
        let conn = self.pool.get()?;
        let id = format!("thread-{}", self.ids.generate());

        conn.execute(
            "INSERT INTO threads (id, title, body, owner, date) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                new_thread.title,
                new_thread.body,
                new_thread.owner,
                timestamp()
            ],
        )?;

        tracing::info!("Thread {} created by {}", id, new_thread.owner);
        Ok(AddedThread {
            id,
            title: new_thread.title.clone(),
            owner: new_thread.owner.clone(),
        })
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> AppResult<ThreadRow> {
        let conn = self.pool.get()?;

        conn.query_row(
            "SELECT t.id, t.title, t.body, t.date, u.username
             FROM threads t
             JOIN users u ON u.id = t.owner
             WHERE t.id = ?1",
            params![thread_id],
            |row| {
                Ok(ThreadRow {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                    date: row.get(3)?,
                    username: row.get(4)?,
                })
            },
        )
        .optional()?
        .ok_or_else(thread_not_found)
    }

    async fn verify_thread_exists(&self, thread_id: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        let exists: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM threads WHERE id = ?1",
            params![thread_id],
            |row| row.get(0),
        )?;

        if exists {
            Ok(())
        } else {
            Err(thread_not_found())
        }
    }
}
