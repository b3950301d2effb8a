//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the wire model
//! shared across pages. Record shapes follow the backend's column names
//! verbatim; nothing here is validated beyond serde decoding.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

// ============ Wire Model ============

/// A customer record from `/customers`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Customer {
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "ServiceAddress", default)]
    pub service_address: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "ZipCode", default)]
    pub zip_code: Option<String>,
    #[serde(rename = "AccountStatus", default)]
    pub account_status: Option<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A bill record from `/bills` or `/bills/{customerId}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Bill {
    #[serde(rename = "BillID")]
    pub bill_id: String,
    #[serde(rename = "AccountID")]
    pub account_id: String,
    #[serde(rename = "IssueDate", default)]
    pub issue_date: Option<String>,
    #[serde(rename = "DueDate", default)]
    pub due_date: Option<String>,
    #[serde(rename = "TotalAmount")]
    pub total_amount: f64,
    #[serde(rename = "PaymentStatus", default)]
    pub payment_status: Option<String>,
}

/// A payment record.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Payment {
    #[serde(rename = "PaymentID")]
    pub payment_id: String,
    #[serde(rename = "BillID")]
    pub bill_id: String,
    #[serde(rename = "PaymentDate")]
    pub payment_date: String,
    #[serde(rename = "PaymentAmount")]
    pub payment_amount: f64,
    #[serde(rename = "PaymentMethod", default)]
    pub payment_method: Option<String>,
}

/// A meter record from `/meters/{customerId}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Meter {
    #[serde(rename = "MeterID")]
    pub meter_id: String,
    #[serde(rename = "AccountID")]
    pub account_id: String,
    #[serde(rename = "MeterType", default)]
    pub meter_type: Option<String>,
    #[serde(rename = "InstallationDate", default)]
    pub installation_date: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// An account record, returned inside `/customer-details/{customerId}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Account {
    #[serde(rename = "AccountID")]
    pub account_id: String,
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "AccountType", default)]
    pub account_type: Option<String>,
    #[serde(rename = "Balance", default)]
    pub balance: Option<f64>,
    #[serde(rename = "BillingCycle", default)]
    pub billing_cycle: Option<String>,
    #[serde(rename = "ServiceStartDate", default)]
    pub service_start_date: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// A tariff row from `/charges`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Charges {
    #[serde(rename = "UtilityType")]
    pub utility_type: String,
    #[serde(rename = "RatePerUnit")]
    pub rate_per_unit: f64,
    #[serde(rename = "FixedCharge")]
    pub fixed_charge: f64,
    #[serde(rename = "TaxPercentage")]
    pub tax_percentage: f64,
    #[serde(rename = "ServiceFee")]
    pub service_fee: f64,
}

/// A service request from `/requests`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServiceRequest {
    #[serde(rename = "RequestID")]
    pub request_id: String,
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "UtilityType", default)]
    pub utility_type: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "RequestDate", default)]
    pub request_date: Option<String>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_decodes_backend_shape() {
        let json = r#"{
            "CustomerID": "CUST-001",
            "FirstName": "Alice",
            "LastName": "Smith",
            "PhoneNumber": "1234567",
            "Email": "alice@example.com",
            "City": "New York",
            "AccountStatus": "Active"
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.customer_id, "CUST-001");
        assert_eq!(customer.full_name(), "Alice Smith");
        assert_eq!(customer.account_status.as_deref(), Some("Active"));
        // Columns the backend omits decode as absent
        assert_eq!(customer.zip_code, None);
    }

    #[test]
    fn test_bill_decodes_with_missing_status() {
        let json = r#"{
            "BillID": "BILL-100",
            "AccountID": "ACCT-1001",
            "TotalAmount": 4500.75
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.total_amount, 4500.75);
        assert_eq!(bill.payment_status, None);
    }
}
