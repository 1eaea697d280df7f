use axum::Json;
use serde_json::json;

use crate::domain::a001_client;

/// GET /apps/invoice/clients
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a001_client::aggregate::Client>>,
    axum::http::StatusCode,
> {
    match a001_client::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list clients: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/client/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a001_client::service::insert_test_data().await {
        Ok(inserted) => Ok(Json(json!({ "inserted": inserted }))),
        Err(e) => {
            tracing::error!("Failed to insert demo clients: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
