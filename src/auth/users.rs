use rusqlite::params;

use crate::db::models::User;
use crate::error::AppResult;
use crate::state::DbPool;

/// Returns the user with this username, creating it on first use.
pub fn get_or_create_user(pool: &DbPool, username: &str, fullname: &str) -> AppResult<User> {
    let conn = pool.get()?;

    let inserted = conn.execute(
        "INSERT OR IGNORE INTO users (id, username, fullname) VALUES (?1, ?2, ?3)",
        params![
            format!("user-{}", uuid::Uuid::now_v7().simple()),
            username,
            fullname
        ],
    )?;
    if inserted > 0 {
        tracing::info!("User {} created", username);
    }

    let user = conn.query_row(
        "SELECT id, username, fullname, created_at FROM users WHERE username = ?1",
        params![username],
        |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                fullname: row.get(2)?,
                created_at: row.get(3)?,
            })
        },
    )?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use tempfile::TempDir;

    #[test]
    fn same_username_yields_same_user() {
        let temp_dir = TempDir::new().unwrap();
        let pool = db::create_pool(&temp_dir.path().join("test.db"), 2).unwrap();
        db::run_migrations(&pool).unwrap();

        let first = get_or_create_user(&pool, "dicoding", "Dicoding Indonesia").unwrap();
        let second = get_or_create_user(&pool, "dicoding", "Someone Else").unwrap();

        assert!(first.id.starts_with("user-"));
        assert_eq!(first, second);
        assert_eq!(second.fullname, "Dicoding Indonesia");
    }
}
