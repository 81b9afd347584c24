use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

// Placeholder until the resume service lands.
pub fn router() -> Router<AppState> {
    Router::new().route("/sample", get(sample))
}

async fn sample() -> Json<Value> {
    Json(json!({ "message": "Resume service sample route" }))
}
