use crate::shared::api_utils::api_url;
use contracts::domain::a002_invoice::aggregate::InvoiceEditData;
use contracts::shared::company_profile::CompanyProfile;
use gloo_net::http::Request;

pub async fn fetch_invoice(id: &str) -> Result<InvoiceEditData, String> {
    let url = api_url(&format!("/api/invoice/{}", id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    match response.status() {
        200 => response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        404 => Err("Invoice not found".to_string()),
        400 => Err(format!("Invalid invoice id: {}", id)),
        status => Err(format!("HTTP {}", status)),
    }
}

pub async fn fetch_company_profile() -> Result<CompanyProfile, String> {
    let response = Request::get(&api_url("/api/company-profile"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
