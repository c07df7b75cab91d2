use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use jobly::{CompanyFilter, CompanyPatch, CompanyRepository, FilterCriteria, NewCompany};
use serde_json::{Value, json};

use super::check;
use crate::AppState;
use crate::error::ApiResult;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{handle}", get(read).patch(update).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewCompany>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(data) = payload?;
    check(&data)?;

    let client = state.client().await?;
    let company = CompanyRepository::create(&client, data).await?;
    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

async fn list(
    State(state): State<AppState>,
    filter: Result<Query<CompanyFilter>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(filter) = filter?;
    filter.validate()?;

    let client = state.client().await?;
    let companies = CompanyRepository::list(&client, &filter).await?;
    Ok(Json(json!({ "companies": companies })))
}

async fn read(State(state): State<AppState>, Path(handle): Path<String>) -> ApiResult<Json<Value>> {
    let client = state.client().await?;
    let company = CompanyRepository::get(&client, &handle).await?;
    Ok(Json(json!({ "company": company })))
}

async fn update(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    payload: Result<Json<CompanyPatch>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(patch) = payload?;
    check(&patch)?;

    let client = state.client().await?;
    let company = CompanyRepository::update(&client, &handle, patch).await?;
    Ok(Json(json!({ "company": company })))
}

async fn remove(State(state): State<AppState>, Path(handle): Path<String>) -> ApiResult<Json<Value>> {
    let client = state.client().await?;
    CompanyRepository::delete(&client, &handle).await?;
    Ok(Json(json!({ "deleted": handle })))
}
