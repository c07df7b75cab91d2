use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use jobly::{FilterCriteria, JobFilter, JobPatch, JobRepository, JoblyError, NewJob};
use serde_json::{Value, json};

use super::check;
use crate::AppState;
use crate::error::ApiResult;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(read).patch(update).delete(remove))
}

/// Job ids are integers; anything else cannot name a job.
fn job_id(raw: &str) -> Result<i32, JoblyError> {
    raw.parse()
        .map_err(|_| JoblyError::not_found(format!("No job: {raw}")))
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(data) = payload?;
    check(&data)?;

    let client = state.client().await?;
    let job = JobRepository::create(&client, data).await?;
    Ok((StatusCode::CREATED, Json(json!({ "job": job }))))
}

async fn list(
    State(state): State<AppState>,
    filter: Result<Query<JobFilter>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(filter) = filter?;
    filter.validate()?;

    let client = state.client().await?;
    let jobs = JobRepository::list(&client, &filter).await?;
    Ok(Json(json!({ "jobs": jobs })))
}

async fn read(State(state): State<AppState>, Path(raw): Path<String>) -> ApiResult<Json<Value>> {
    let id = job_id(&raw)?;
    let client = state.client().await?;
    let job = JobRepository::get(&client, id).await?;
    Ok(Json(json!({ "job": job })))
}

async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<JobPatch>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let id = job_id(&raw)?;
    let Json(patch) = payload?;
    check(&patch)?;

    let client = state.client().await?;
    let job = JobRepository::update(&client, id, patch).await?;
    Ok(Json(json!({ "job": job })))
}

async fn remove(State(state): State<AppState>, Path(raw): Path<String>) -> ApiResult<Json<Value>> {
    let id = job_id(&raw)?;
    let client = state.client().await?;
    JobRepository::delete(&client, id).await?;
    Ok(Json(json!({ "deleted": id })))
}
