use crate::shared::api_utils::api_url;
use contracts::domain::a001_client::aggregate::Client;
use gloo_net::http::Request;

/// Справочник клиентов для выпадающего списка "Invoice To"
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let response = Request::get(&api_url("/apps/invoice/clients"))
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
