use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::jwt::AuthClaims;
use crate::error::ApiError;
use crate::jobs::{dto::CreateJobRequest, repo::Job};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/:id", get(get_job))
}

#[instrument(skip(state))]
pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, ApiError> {
    let jobs = Job::list_all(&state.db).await?;
    Ok(Json(jobs))
}

#[instrument(skip(state))]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    // Unknown and malformed ids look the same to the caller.
    let id: Uuid = id.parse().map_err(|_| ApiError::NotFound("Job not found"))?;
    let job = Job::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Job not found"))?;
    Ok(Json(job))
}

#[instrument(skip(state, claims, payload), fields(user_id = %claims.0.sub))]
pub async fn create_job(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<CreateJobRequest>,
) -> Result<Json<Job>, ApiError> {
    if !claims.0.role.is_employer() {
        warn!(role = %claims.0.role, "non-employer tried to post a job");
        return Err(ApiError::Forbidden("Only employers can post jobs"));
    }

    if let Some(field) = payload.blank_field() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }

    let job = Job::create(&state.db, &payload, claims.0.sub).await?;

    info!(job_id = %job.id, employer_id = %job.employer_id, title = %job.title, "job posted");
    Ok(Json(job))
}
