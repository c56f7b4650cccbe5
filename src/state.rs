use std::sync::Arc;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::Config;
use crate::use_cases::UseCases;

pub type DbPool = Pool<SqliteConnectionManager>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    pub use_cases: Arc<UseCases>,
}

impl AppState {
    /// Wires the SQLite adapters into the use cases.
    pub fn new(db: DbPool, config: Config) -> Self {
        let use_cases = UseCases::sqlite(db.clone());
        Self {
            db,
            config,
            use_cases: Arc::new(use_cases),
        }
    }
}
