use std::sync::Arc;

use serde_json::Value;

use crate::error::AppResult;
use crate::threads::{AddedThread, NewThread, ThreadRepository};

pub struct AddThread {
    threads: Arc<dyn ThreadRepository>,
}

impl AddThread {
    pub fn new(threads: Arc<dyn ThreadRepository>) -> Self {
        Self { threads }
    }

    pub async fn execute(&self, payload: &Value, owner: &str) -> AppResult<AddedThread> {
        let new_thread = NewThread::from_payload(payload, owner)?;
        self.threads.add_thread(&new_thread).await
    }
}
