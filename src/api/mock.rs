//! Mock Dataset
//!
//! Hardcoded sample data used when the backend is unreachable. Only the
//! degraded read path and the dashboard's payment history draw from here;
//! strict endpoints never substitute this data.

use crate::state::global::{Customer, Payment};

#[cfg(test)]
use crate::state::global::Bill;

/// Fallback customer collection.
pub fn customers() -> Vec<Customer> {
    vec![
        customer("CUST-001", "Alice", "Smith", "1234567", "alice@example.com", "New York", "Active"),
        customer("CUST-002", "Bob", "Jones", "8765432", "bob@example.com", "Los Angeles", "Active"),
        customer("CUST-003", "Carol", "Khan", "5551234", "carol@example.com", "Karachi", "Inactive"),
        customer("CUST-004", "Daud", "Malik", "5559876", "daud@example.com", "Lahore", "Active"),
    ]
}

/// Sample bills the payment history refers to. Test-only: no degraded
/// path serves bills.
#[cfg(test)]
pub fn bills() -> Vec<Bill> {
    vec![
        bill("BILL-1001", "ACCT-1001", "2024-01-01", "2024-01-15", 4500.0, "Paid"),
        bill("BILL-1002", "ACCT-1002", "2024-01-01", "2024-01-15", 7200.5, "Paid"),
        bill("BILL-1003", "ACCT-1001", "2024-02-01", "2024-02-15", 4800.0, "Unpaid"),
        bill("BILL-1004", "ACCT-1003", "2024-02-01", "2024-02-15", 2100.0, "Pending"),
        bill("BILL-1005", "ACCT-1002", "2024-03-01", "2024-03-15", 6950.25, "Unpaid"),
    ]
}

/// Fallback payment history.
pub fn payments() -> Vec<Payment> {
    vec![
        payment("PAY-5001", "BILL-1001", "2024-01-05", 4500.0, "Credit Card"),
        payment("PAY-5002", "BILL-1002", "2024-01-12", 7200.5, "Bank Transfer"),
        payment("PAY-5003", "BILL-1003", "2024-02-08", 2400.0, "Cash"),
        payment("PAY-5004", "BILL-1004", "2024-02-20", 2100.0, "Credit Card"),
        payment("PAY-5005", "BILL-1005", "2024-03-03", 3475.0, "EasyPaisa"),
        payment("PAY-5006", "BILL-1005", "2024-03-18", 3475.25, "EasyPaisa"),
    ]
}

fn customer(
    id: &str,
    first: &str,
    last: &str,
    phone: &str,
    email: &str,
    city: &str,
    status: &str,
) -> Customer {
    Customer {
        customer_id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone_number: Some(phone.to_string()),
        email: Some(email.to_string()),
        service_address: None,
        city: Some(city.to_string()),
        zip_code: None,
        account_status: Some(status.to_string()),
    }
}

#[cfg(test)]
fn bill(id: &str, account: &str, issued: &str, due: &str, total: f64, status: &str) -> Bill {
    Bill {
        bill_id: id.to_string(),
        account_id: account.to_string(),
        issue_date: Some(issued.to_string()),
        due_date: Some(due.to_string()),
        total_amount: total,
        payment_status: Some(status.to_string()),
    }
}

fn payment(id: &str, bill: &str, date: &str, amount: f64, method: &str) -> Payment {
    Payment {
        payment_id: id.to_string(),
        bill_id: bill.to_string(),
        payment_date: date.to_string(),
        payment_amount: amount,
        payment_method: Some(method.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_ids_are_unique() {
        let mut ids: Vec<_> = customers().into_iter().map(|c| c.customer_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), customers().len());
    }

    #[test]
    fn test_mock_payments_reference_mock_bills() {
        let bill_ids: Vec<_> = bills().into_iter().map(|b| b.bill_id).collect();
        for p in payments() {
            assert!(bill_ids.contains(&p.bill_id), "dangling bill ref {}", p.bill_id);
        }
    }
}
