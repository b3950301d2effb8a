//! HTTP API Client
//!
//! Functions for communicating with the PowerPay backend API.
//!
//! Endpoints come in two failure policies. Strict calls return `Err` on any
//! network or non-2xx failure and never retry. Degraded calls never fail the
//! caller: `login` substitutes a connection-error sentinel and
//! `get_customers` falls back to the bundled mock dataset, tagged so callers
//! can see they are looking at offline data.

use gloo_net::http::Request;

use crate::api::mock;
use crate::state::global::{
    Account, Bill, Charges, Customer, Meter, Payment, ServiceRequest,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("powerpay_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Result of a degraded read: live server data or the mock fallback.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback(T),
}

impl<T> Fetched<T> {
    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) | Fetched::Fallback(data) => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Fetched::Live(data) | Fetched::Fallback(data) => data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback(_))
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<Customer>,
}

impl LoginResponse {
    /// Sentinel returned when the backend cannot be reached.
    fn connection_error() -> Self {
        LoginResponse {
            success: false,
            message: Some("Connection Error".to_string()),
            user: None,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SignupRequest {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "ServiceAddress")]
    pub service_address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "ZipCode")]
    pub zip_code: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct SignupResponse {
    pub success: bool,
    #[serde(rename = "customerId", default)]
    pub customer_id: Option<String>,
    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub meters: Vec<Meter>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct DeletionCheck {
    pub eligible: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{success, error?}` acknowledgement for write endpoints.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct AdminStats {
    #[serde(rename = "totalCustomers")]
    pub total_customers: u32,
    #[serde(rename = "activeAccounts")]
    pub active_accounts: u32,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
    #[serde(rename = "pendingPayments")]
    pub pending_payments: f64,
    #[serde(rename = "recentPayments", default)]
    pub recent_payments: Vec<Payment>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PayBillRequest {
    #[serde(rename = "BillID")]
    pub bill_id: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    fn text(self, fallback: &str) -> String {
        self.error
            .or(self.message)
            .unwrap_or_else(|| fallback.to_string())
    }
}

// ============ Auth ============

/// Attempt a login. Never fails: any network error or non-2xx status
/// yields the "Connection Error" sentinel instead.
pub async fn login(role: &str, customer_id: Option<&str>) -> LoginResponse {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        role: String,
        #[serde(rename = "customerId")]
        customer_id: Option<String>,
    }

    let api_base = get_api_base();
    web_sys::console::log_1(
        &format!("API: attempting login as {}", role).into(),
    );

    let request = Request::post(&format!("{}/login", api_base)).json(&LoginRequest {
        role: role.to_string(),
        customer_id: customer_id.map(|s| s.to_string()),
    });

    let request = match request {
        Ok(req) => req,
        Err(_) => return LoginResponse::connection_error(),
    };

    match request.send().await {
        Ok(response) if response.ok() => response
            .json()
            .await
            .unwrap_or_else(|_| LoginResponse::connection_error()),
        Ok(response) => {
            // Non-2xx collapses to the sentinel; the body is not consulted
            web_sys::console::error_1(
                &format!("Login failed with status {}", response.status()).into(),
            );
            LoginResponse::connection_error()
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Login error: {}", e).into());
            LoginResponse::connection_error()
        }
    }
}

/// Register a new customer.
pub async fn signup(data: &SignupRequest) -> Result<SignupResponse, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/signup", api_base))
        .json(data)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response
            .json()
            .await
            .unwrap_or(ApiError { error: None, message: None });
        return Err(error.text("Signup failed"));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ Customers ============

/// Fetch the customer collection.
///
/// On any failure the bundled mock dataset is substituted and tagged as
/// `Fallback` so callers can surface the degraded mode.
pub async fn get_customers() -> Fetched<Vec<Customer>> {
    let api_base = get_api_base();

    let result = Request::get(&format!("{}/customers", api_base)).send().await;

    match result {
        Ok(response) if response.ok() => match response.json().await {
            Ok(customers) => Fetched::Live(customers),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Customers parse failed, using mock data: {}", e).into(),
                );
                Fetched::Fallback(mock::customers())
            }
        },
        _ => {
            web_sys::console::warn_1(&"API failed, using mock data".into());
            Fetched::Fallback(mock::customers())
        }
    }
}

/// Fetch a single customer by id via the collection endpoint.
///
/// Returns `None` when no record matches; callers must handle absence.
pub async fn get_customer(id: &str) -> Option<Customer> {
    let customers = get_customers().await.into_data();
    find_customer(&customers, id)
}

/// Linear scan for a customer by exact id match.
pub fn find_customer(customers: &[Customer], id: &str) -> Option<Customer> {
    customers.iter().find(|c| c.customer_id == id).cloned()
}

// ============ Data ============

/// Fetch meters for a customer.
pub async fn get_meters(customer_id: &str) -> Result<Vec<Meter>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/meters/{}", api_base, customer_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API Error: Meters".to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch bills. Pass `"all"` for the whole collection (admin view) or a
/// customer id for that customer's bills.
pub async fn get_bills(scope: &str) -> Result<Vec<Bill>, String> {
    let api_base = get_api_base();
    let url = if scope == "all" {
        format!("{}/bills", api_base)
    } else {
        format!("{}/bills/{}", api_base, scope)
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API Error: Bills".to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a customer's accounts and meters.
pub async fn get_customer_details(customer_id: &str) -> Result<CustomerDetails, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/customer-details/{}", api_base, customer_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API Error: Customer Details".to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Ask the backend whether the account can be deleted.
pub async fn check_deletion_eligibility(customer_id: &str) -> Result<DeletionCheck, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/delete-account-check/{}", api_base, customer_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API Error: Deletion Check".to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Record a bill payment.
pub async fn pay_bill(data: &PayBillRequest) -> Result<ActionResponse, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/pay-bill", api_base))
        .json(data)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response
            .json()
            .await
            .unwrap_or(ApiError { error: None, message: None });
        return Err(error.text("API Error: Pay Bill"));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Flip a bill between paid and unpaid (admin action).
pub async fn toggle_bill_status(bill_id: &str) -> Result<ActionResponse, String> {
    #[derive(serde::Serialize)]
    struct ToggleRequest {
        #[serde(rename = "billId")]
        bill_id: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/toggle-bill-status", api_base))
        .json(&ToggleRequest { bill_id: bill_id.to_string() })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response
            .json()
            .await
            .unwrap_or(ApiError { error: None, message: None });
        return Err(error.text("API Error: Toggle Bill"));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ Admin Data ============

/// Fetch the tariff table.
pub async fn get_charges() -> Result<Vec<Charges>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/charges", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API Error: Charges".to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Replace the tariff table.
pub async fn update_charges(charges: &[Charges]) -> Result<ActionResponse, String> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/charges", api_base))
        .json(&charges)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response
            .json()
            .await
            .unwrap_or(ApiError { error: None, message: None });
        return Err(error.text("API Error: Update Charges"));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the service request queue.
pub async fn get_requests() -> Result<Vec<ServiceRequest>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/requests", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API Error: Requests".to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// File a new service request.
pub async fn create_request(data: &ServiceRequest) -> Result<ActionResponse, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/requests", api_base))
        .json(data)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response
            .json()
            .await
            .unwrap_or(ApiError { error: None, message: None });
        return Err(error.text("API Error: Create Request"));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Update a service request's status; `action` carries the follow-up the
/// backend should take on approval (e.g. "connect").
pub async fn update_request(
    request_id: &str,
    status: &str,
    action: Option<&str>,
) -> Result<ActionResponse, String> {
    #[derive(serde::Serialize)]
    struct UpdateRequest {
        #[serde(rename = "RequestID")]
        request_id: String,
        #[serde(rename = "Status")]
        status: String,
        action: Option<String>,
    }

    let api_base = get_api_base();

    let response = Request::put(&format!("{}/requests", api_base))
        .json(&UpdateRequest {
            request_id: request_id.to_string(),
            status: status.to_string(),
            action: action.map(|s| s.to_string()),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response
            .json()
            .await
            .unwrap_or(ApiError { error: None, message: None });
        return Err(error.text("API Error: Update Request"));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch precomputed admin dashboard stats.
pub async fn get_admin_stats() -> Result<AdminStats, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/admin/stats", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API Error: Stats".to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_customer_exact_match() {
        let customers = mock::customers();
        let found = find_customer(&customers, "CUST-002").unwrap();
        assert_eq!(found.first_name, "Bob");
    }

    #[test]
    fn test_find_customer_absent_id() {
        let customers = mock::customers();
        assert!(find_customer(&customers, "CUST-999").is_none());
        assert!(find_customer(&[], "CUST-001").is_none());
    }

    #[test]
    fn test_fetched_tags_fallback() {
        let live = Fetched::Live(vec![1, 2]);
        let fallback = Fetched::Fallback(vec![3]);
        assert!(!live.is_fallback());
        assert!(fallback.is_fallback());
        assert_eq!(fallback.data(), &vec![3]);
    }

    #[test]
    fn test_login_response_sentinel() {
        // Every login failure arm (network error, request build failure,
        // non-2xx status, undecodable body) returns exactly this value;
        // backend failure bodies never reach the caller.
        let sentinel = LoginResponse::connection_error();
        assert!(!sentinel.success);
        assert_eq!(sentinel.message.as_deref(), Some("Connection Error"));
        assert!(sentinel.user.is_none());
    }
}
