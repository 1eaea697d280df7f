use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use contracts::shared::company_profile::CompanyProfile;
use std::sync::Arc;

use crate::handlers;
use crate::shared::request_logger::request_logger;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub company: Arc<CompanyProfile>,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Справочник клиентов для формы счёта
        .route(
            "/apps/invoice/clients",
            get(handlers::a001_client::list_all),
        )
        .route(
            "/api/client/testdata",
            post(handlers::a001_client::insert_test_data),
        )
        // Invoice handlers
        .route(
            "/api/invoice/testdata",
            post(handlers::a002_invoice::insert_test_data),
        )
        .route("/api/invoice/:id", get(handlers::a002_invoice::get_by_id))
        .route(
            "/api/company-profile",
            get(handlers::company_profile::get),
        )
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_invoice;
    use crate::shared::data::db::install_in_memory;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::domain::a002_invoice::aggregate::InvoiceEditData;
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(AppState {
            company: Arc::new(CompanyProfile::default()),
        })
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    // Единственный тест, работающий с глобальным подключением
    #[tokio::test]
    async fn test_invoice_status_codes() {
        install_in_memory().await.unwrap();

        assert_eq!(get("/api/invoice/1").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get("/api/invoice/49!87").await.0, StatusCode::BAD_REQUEST);

        a002_invoice::service::insert_test_data().await.unwrap();
        let (status, body) = get("/api/invoice/4987").await;
        assert_eq!(status, StatusCode::OK);
        let data: InvoiceEditData = serde_json::from_slice(&body).unwrap();
        assert_eq!(data.payment_details.iban, "ETD95476213874685");
    }

    #[tokio::test]
    async fn test_company_profile_and_health() {
        let (status, body) = get("/api/company-profile").await;
        assert_eq!(status, StatusCode::OK);
        let profile: CompanyProfile = serde_json::from_slice(&body).unwrap();
        assert_eq!(profile, CompanyProfile::default());

        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok".to_vec());
    }
}
