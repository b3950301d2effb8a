//! Sidebar Component
//!
//! Portal navigation sidebar with admin and customer menu variants. The
//! menus are fixed ordered sequences; the entry whose id equals the active
//! page id gets the active link class, by exact string equality.

use leptos::*;
use leptos_router::*;

use crate::state::session;

/// One entry in a navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
}

/// The admin navigation menu, in display order.
pub fn admin_menu() -> Vec<MenuItem> {
    vec![
        MenuItem { id: "dashboard", label: "Dashboard", icon: "fa-chart-line", route: "/admin/dashboard" },
        MenuItem { id: "customers", label: "Customers", icon: "fa-users", route: "/admin/customers" },
        MenuItem { id: "billing", label: "Billing", icon: "fa-file-invoice-dollar", route: "/admin/billing" },
        MenuItem { id: "charges", label: "Charges", icon: "fa-tags", route: "/admin/charges" },
        MenuItem { id: "requests", label: "Requests", icon: "fa-envelope-open-text", route: "/admin/requests" },
    ]
}

/// The customer navigation menu, in display order.
pub fn customer_menu() -> Vec<MenuItem> {
    vec![
        MenuItem { id: "dashboard", label: "My Dashboard", icon: "fa-home", route: "/customer/dashboard" },
        MenuItem { id: "transactions", label: "Transactions", icon: "fa-file-invoice-dollar", route: "/customer/transactions" },
        MenuItem { id: "mymeters", label: "My Meters", icon: "fa-tachometer-alt", route: "/customer/meters" },
        MenuItem { id: "profile", label: "Settings", icon: "fa-user", route: "/customer/profile" },
    ]
}

/// Class string for a menu link, marking only the exact active match.
pub fn link_class(active_page: &str, item_id: &str) -> &'static str {
    if active_page == item_id {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Sidebar for admin pages.
#[component]
pub fn AdminSidebar(active_page: &'static str) -> impl IntoView {
    view! {
        <Sidebar
            brand="PowerPay Admin"
            role_label="Administrator"
            items=admin_menu()
            active_page=active_page
        />
    }
}

/// Sidebar for customer pages.
#[component]
pub fn CustomerSidebar(active_page: &'static str) -> impl IntoView {
    view! {
        <Sidebar
            brand="PowerPay Client"
            role_label="Customer"
            items=customer_menu()
            active_page=active_page
        />
    }
}

#[component]
fn Sidebar(
    brand: &'static str,
    role_label: &'static str,
    items: Vec<MenuItem>,
    active_page: &'static str,
) -> impl IntoView {
    view! {
        <aside class="sidebar slideInLeft">
            <div class="sidebar-header">
                <div class="brand">
                    <i class="fa-solid fa-bolt brand-icon"></i>
                    {brand}
                </div>
            </div>
            <ul class="nav-menu">
                {items.into_iter().map(|item| view! {
                    <li class="nav-item">
                        <A href=item.route class=link_class(active_page, item.id)>
                            <span class="nav-icon">
                                <i class=format!("fa-solid {}", item.icon)></i>
                            </span>
                            {item.label}
                        </A>
                    </li>
                }).collect_view()}
            </ul>
            <div class="sidebar-footer">
                <div class="user-mini-profile">
                    <div class="user-info">
                        <div class="user-role">{role_label}</div>
                    </div>
                    <button
                        class="btn-logout"
                        title="Logout"
                        on:click=move |_| session::logout()
                    >
                        <i class="fa-solid fa-sign-out-alt"></i>
                    </button>
                </div>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_entry_marked_active() {
        let menu = admin_menu();
        let active: Vec<_> = menu
            .iter()
            .filter(|item| link_class("dashboard", item.id) == "nav-link active")
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "dashboard");
    }

    #[test]
    fn test_unknown_active_page_marks_nothing() {
        for item in customer_menu() {
            assert_eq!(link_class("payments", item.id), "nav-link");
        }
    }

    #[test]
    fn test_no_partial_matching() {
        // "dash" must not light up "dashboard"
        assert_eq!(link_class("dash", "dashboard"), "nav-link");
        assert_eq!(link_class("dashboard ", "dashboard"), "nav-link");
    }

    #[test]
    fn test_menu_order_is_fixed() {
        let ids: Vec<_> = admin_menu().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["dashboard", "customers", "billing", "charges", "requests"]);

        let ids: Vec<_> = customer_menu().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["dashboard", "transactions", "mymeters", "profile"]);
    }
}
