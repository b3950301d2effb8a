//! Status Badge Component
//!
//! Colored pill for account and payment status strings. Unknown statuses
//! are displayed verbatim with the neutral class; nothing is validated
//! against an allowed set.

use leptos::*;

/// Badge class for a status string.
pub fn badge_class(status: &str) -> &'static str {
    match status {
        "Active" => "status-badge status-active",
        "Inactive" => "status-badge status-inactive",
        "Paid" => "status-badge status-paid",
        "Unpaid" => "status-badge status-unpaid",
        "Pending" => "status-badge status-pending",
        "Approved" => "status-badge status-active",
        "Rejected" => "status-badge status-inactive",
        _ => "status-badge",
    }
}

#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let class = badge_class(&status);
    view! {
        <span class=class>{status}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_get_variant_classes() {
        assert_eq!(badge_class("Active"), "status-badge status-active");
        assert_eq!(badge_class("Unpaid"), "status-badge status-unpaid");
        assert_eq!(badge_class("Pending"), "status-badge status-pending");
    }

    #[test]
    fn test_unknown_status_is_neutral_not_rejected() {
        assert_eq!(badge_class("Overdue"), "status-badge");
        // Case-sensitive on purpose
        assert_eq!(badge_class("active"), "status-badge");
    }
}
