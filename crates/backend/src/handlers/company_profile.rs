use axum::{extract::State, Json};
use contracts::shared::company_profile::CompanyProfile;

use crate::routes::AppState;

/// GET /api/company-profile
pub async fn get(State(state): State<AppState>) -> Json<CompanyProfile> {
    Json(state.company.as_ref().clone())
}
