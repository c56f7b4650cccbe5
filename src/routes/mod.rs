pub mod seed;
pub mod threads;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;

/// `{"status":"success","data":{...}}`
pub fn success(data: Value) -> Json<Value> {
    Json(json!({ "status": "success", "data": data }))
}

/// `{"status":"success"}` for mutations with nothing to return.
pub fn done() -> Json<Value> {
    Json(json!({ "status": "success" }))
}

/// Unwraps a raw JSON body. Field checks happen later in the entity constructors.
pub fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
