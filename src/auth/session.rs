use rand::Rng;
use rusqlite::{params, OptionalExtension};

use crate::db::models::User;
use crate::error::AppResult;
use crate::state::DbPool;

/// Create a new session for a user. Returns the bearer token.
pub fn create_session(pool: &DbPool, user_id: &str, hours: u64) -> AppResult<String> {
    let conn = pool.get()?;

    let token = generate_token();
    let id = uuid::Uuid::now_v7().to_string();

    conn.execute(
        "INSERT INTO sessions (id, user_id, token, expires_at) VALUES (?1, ?2, ?3, datetime('now', ?4))",
        params![id, user_id, token, format!("+{} hours", hours)],
    )?;

    tracing::info!("Session created for {}", user_id);
    Ok(token)
}

/// The user behind a non-expired token, if any.
pub fn find_session_user(pool: &DbPool, token: &str) -> AppResult<Option<User>> {
    let conn = pool.get()?;

    let user = conn
        .query_row(
            "SELECT u.id, u.username, u.fullname, u.created_at FROM sessions s \
             JOIN users u ON u.id = s.user_id \
             WHERE s.token = ?1 AND s.expires_at > datetime('now')",
            params![token],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    fullname: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(user)
}

/// Generate a cryptographically random 32-byte hex token.
fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 32] = rng.gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users;
    use crate::db;
    use tempfile::TempDir;

    fn create_test_pool() -> (DbPool, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = db::create_pool(&temp_dir.path().join("test.db"), 2).unwrap();
        db::run_migrations(&pool).unwrap();
        (pool, temp_dir)
    }

    #[test]
    fn generate_token_is_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generate_token_is_unique() {
        let t1 = generate_token();
        let t2 = generate_token();
        assert_ne!(t1, t2);
    }

    #[test]
    fn session_resolves_to_its_user() {
        let (pool, _temp) = create_test_pool();
        let user = users::get_or_create_user(&pool, "dicoding", "Dicoding Indonesia").unwrap();

        let token = create_session(&pool, &user.id, 3).unwrap();
        let found = find_session_user(&pool, &token).unwrap();

        assert_eq!(found, Some(user));
    }

    #[test]
    fn unknown_token_resolves_to_nobody() {
        let (pool, _temp) = create_test_pool();
        assert_eq!(find_session_user(&pool, "nope").unwrap(), None);
    }

    #[test]
    fn expired_session_resolves_to_nobody() {
        let (pool, _temp) = create_test_pool();
        let user = users::get_or_create_user(&pool, "dicoding", "Dicoding Indonesia").unwrap();
        pool.get()
            .unwrap()
            .execute(
                "INSERT INTO sessions (id, user_id, token, expires_at) \
                 VALUES ('s-1', ?1, 'stale', datetime('now', '-1 hours'))",
                params![user.id],
            )
            .unwrap();

        assert_eq!(find_session_user(&pool, "stale").unwrap(), None);
    }
}
