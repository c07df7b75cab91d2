use axum::Json;
use serde_json::{Value, json};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::validate::Validate;

pub mod companies;
pub mod jobs;

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Run payload checks before a connection is taken from the pool.
fn check(payload: &impl Validate) -> ApiResult<()> {
    payload.validate().into_result().map_err(ApiError::from)
}

impl AppState {
    pub(crate) async fn client(&self) -> ApiResult<deadpool_postgres::Client> {
        self.pool
            .get()
            .await
            .map_err(|e| ApiError::from(jobly::JoblyError::from(e)))
    }
}
