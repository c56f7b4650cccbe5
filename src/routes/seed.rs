use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{session, users};
use crate::error::AppResult;
use crate::state::AppState;

/// Env var that mounts `/test/seed`.
pub const TEST_SEED_ENV: &str = "FORUM_TEST_SEED";

#[derive(Debug, Deserialize)]
pub struct SeedParams {
    #[serde(default = "default_username")]
    pub username: String,
}

fn default_username() -> String {
    "testuser".to_string()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/test/seed", get(seed))
}

/// Test-only: creates (or reuses) a user and opens a session for it.
async fn seed(
    State(state): State<AppState>,
    Query(params): Query<SeedParams>,
) -> AppResult<Json<Value>> {
    let user = users::get_or_create_user(&state.db, &params.username, &params.username)?;
    let token = session::create_session(&state.db, &user.id, state.config.auth.session_hours)?;

    Ok(Json(json!({
        "userId": user.id,
        "username": user.username,
        "accessToken": token,
    })))
}
