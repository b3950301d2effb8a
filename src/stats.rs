//! Dashboard Stats
//!
//! Pure aggregation over in-memory collections, no I/O. Pages feed these
//! functions either live API data or the mock fallback and render the
//! results directly.

use chrono::NaiveDate;

use crate::state::global::{Bill, Customer, Payment};

/// Number of rows shown in the recent payments table.
const RECENT_LIMIT: usize = 5;

/// Total customer count.
pub fn total_customers(customers: &[Customer]) -> usize {
    customers.len()
}

/// Count of customers whose account status is exactly "Active".
pub fn active_accounts(customers: &[Customer]) -> usize {
    customers
        .iter()
        .filter(|c| c.account_status.as_deref() == Some("Active"))
        .count()
}

/// Sum of all payment amounts.
pub fn total_revenue(payments: &[Payment]) -> f64 {
    payments.iter().map(|p| p.payment_amount).sum()
}

/// Sum of bill totals still outstanding ("Unpaid" or "Pending").
pub fn pending_payments(bills: &[Bill]) -> f64 {
    bills
        .iter()
        .filter(|b| {
            matches!(b.payment_status.as_deref(), Some("Unpaid") | Some("Pending"))
        })
        .map(|b| b.total_amount)
        .sum()
}

/// Revenue bucketed by "Mon YYYY" label.
///
/// Bucket order is first-seen insertion order, not chronological order,
/// matching the portal's shipped chart. Payments whose dates fail to parse
/// are bucketed under the raw date string.
pub fn monthly_revenue(payments: &[Payment]) -> Vec<(String, f64)> {
    let mut buckets: Vec<(String, f64)> = Vec::new();

    for payment in payments {
        let label = match parse_date(&payment.payment_date) {
            Some(date) => date.format("%b %Y").to_string(),
            None => payment.payment_date.clone(),
        };

        match buckets.iter_mut().find(|(l, _)| *l == label) {
            Some((_, total)) => *total += payment.payment_amount,
            None => buckets.push((label, payment.payment_amount)),
        }
    }

    buckets
}

/// The most recent payments, newest first, at most five.
///
/// The sort is stable, so equal or unparseable dates keep their input order.
pub fn recent_payments(payments: &[Payment]) -> Vec<Payment> {
    let mut sorted: Vec<Payment> = payments.to_vec();
    sorted.sort_by(|a, b| {
        let da = parse_date(&a.payment_date);
        let db = parse_date(&b.payment_date);
        db.cmp(&da)
    });
    sorted.truncate(RECENT_LIMIT);
    sorted
}

/// Parse the leading `YYYY-MM-DD` of a backend date string.
///
/// The Flask backend serializes DATE and DATETIME columns as ISO strings,
/// so taking the first ten characters covers both.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let head = value.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Format an amount as Pakistani rupees, e.g. `Rs 12,345.50`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-Rs {}.{:02}", grouped, fraction)
    } else {
        format!("Rs {}.{:02}", grouped, fraction)
    }
}

/// Format a backend date string for display (`DD/MM/YYYY`).
///
/// Unparseable input is shown verbatim.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock;

    fn payment(id: &str, date: &str, amount: f64) -> Payment {
        Payment {
            payment_id: id.to_string(),
            bill_id: "BILL-1".to_string(),
            payment_date: date.to_string(),
            payment_amount: amount,
            payment_method: None,
        }
    }

    #[test]
    fn test_active_accounts_never_exceed_total() {
        let customers = mock::customers();
        assert!(active_accounts(&customers) <= total_customers(&customers));
    }

    fn customer(id: &str, status: &str) -> Customer {
        Customer {
            customer_id: id.to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone_number: None,
            email: None,
            service_address: None,
            city: None,
            zip_code: None,
            account_status: Some(status.to_string()),
        }
    }

    #[test]
    fn test_active_accounts_exact_match() {
        let mut customers = vec![customer("C1", "Active"), customer("C2", "Inactive")];

        assert_eq!(total_customers(&customers), 2);
        assert_eq!(active_accounts(&customers), 1);

        // Case-sensitive: "active" does not count
        customers[0].account_status = Some("active".to_string());
        assert_eq!(active_accounts(&customers), 0);
    }

    #[test]
    fn test_total_revenue_is_permutation_invariant() {
        let mut payments = vec![
            payment("P1", "2024-01-05", 100.0),
            payment("P2", "2024-02-01", 50.0),
            payment("P3", "2024-02-10", 25.5),
        ];
        let forward = total_revenue(&payments);
        payments.reverse();
        assert_eq!(forward, total_revenue(&payments));
        assert_eq!(forward, 175.5);
    }

    #[test]
    fn test_monthly_revenue_buckets() {
        let payments = vec![
            payment("P1", "2024-01-05", 100.0),
            payment("P2", "2024-02-01", 50.0),
        ];
        let series = monthly_revenue(&payments);
        assert_eq!(series, vec![
            ("Jan 2024".to_string(), 100.0),
            ("Feb 2024".to_string(), 50.0),
        ]);
    }

    #[test]
    fn test_monthly_revenue_keeps_first_seen_order() {
        // A February payment arriving before January keeps February first.
        let payments = vec![
            payment("P1", "2024-02-01", 50.0),
            payment("P2", "2024-01-05", 100.0),
            payment("P3", "2024-02-20", 10.0),
        ];
        let series = monthly_revenue(&payments);
        assert_eq!(series[0], ("Feb 2024".to_string(), 60.0));
        assert_eq!(series[1], ("Jan 2024".to_string(), 100.0));
    }

    #[test]
    fn test_recent_payments_caps_at_five() {
        let payments: Vec<Payment> = (1..=8)
            .map(|i| payment(&format!("P{}", i), &format!("2024-01-{:02}", i), 10.0))
            .collect();
        let recent = recent_payments(&payments);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].payment_id, "P8");
        assert_eq!(recent[4].payment_id, "P4");
    }

    #[test]
    fn test_recent_payments_returns_all_when_few() {
        let payments = vec![
            payment("P1", "2024-01-05", 100.0),
            payment("P2", "2024-02-01", 50.0),
        ];
        let recent = recent_payments(&payments);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].payment_id, "P2");
        assert_eq!(recent[1].payment_id, "P1");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0), "Rs 0.00");
        assert_eq!(format_currency(1234.5), "Rs 1,234.50");
        assert_eq!(format_currency(1234567.89), "Rs 1,234,567.89");
        assert_eq!(format_currency(-250.0), "-Rs 250.00");
    }

    #[test]
    fn test_format_date_handles_datetime_and_garbage() {
        assert_eq!(format_date("2024-01-05"), "05/01/2024");
        assert_eq!(format_date("2024-01-05T14:30:00"), "05/01/2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
