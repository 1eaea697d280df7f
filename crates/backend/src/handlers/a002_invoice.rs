use axum::{extract::Path, Json};
use contracts::domain::a002_invoice::aggregate::{InvoiceEditData, InvoiceId};
use contracts::domain::common::AggregateId;
use serde_json::json;

use crate::domain::a002_invoice::{self, service::InvoiceLookupError};

/// GET /api/invoice/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<InvoiceEditData>, axum::http::StatusCode> {
    let invoice_id = match InvoiceId::from_string(&id) {
        Ok(invoice_id) => invoice_id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_invoice::service::get_by_id(&invoice_id).await {
        Ok(v) => Ok(Json(v)),
        Err(InvoiceLookupError::NotFound(_)) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load invoice {}: {}", invoice_id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/invoice/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a002_invoice::service::insert_test_data().await {
        Ok(inserted) => Ok(Json(json!({ "inserted": inserted }))),
        Err(e) => {
            tracing::error!("Failed to insert demo invoices: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
