use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::extractors::CurrentUser;
use crate::routes::{done, json_body, success};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/threads", post(add_thread))
        .route("/threads/{thread_id}", get(get_thread))
        .route("/threads/{thread_id}/comments", post(add_comment))
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(add_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(delete_reply),
        )
}

async fn add_thread(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let payload = json_body(body)?;
    let added_thread = state.use_cases.add_thread.execute(&payload, &user.id).await?;

    Ok((
        StatusCode::CREATED,
        success(json!({ "addedThread": added_thread })),
    ))
}

async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> AppResult<Json<Value>> {
    let thread = state.use_cases.get_thread.execute(&thread_id).await?;
    Ok(success(json!({ "thread": thread })))
}

async fn add_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(thread_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let payload = json_body(body)?;
    let added_comment = state
        .use_cases
        .add_comment
        .execute(&payload, &thread_id, &user.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        success(json!({ "addedComment": added_comment })),
    ))
}

async fn delete_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    state
        .use_cases
        .delete_comment
        .execute(&thread_id, &comment_id, &user.id)
        .await?;
    Ok(done())
}

async fn add_reply(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let payload = json_body(body)?;
    let added_reply = state
        .use_cases
        .add_reply
        .execute(&payload, &thread_id, &comment_id, &user.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        success(json!({ "addedReply": added_reply })),
    ))
}

async fn delete_reply(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> AppResult<Json<Value>> {
    state
        .use_cases
        .delete_reply
        .execute(&thread_id, &comment_id, &reply_id, &user.id)
        .await?;
    Ok(done())
}
