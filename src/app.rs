//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::admin::{
    AdminBilling, AdminCharges, AdminCustomers, AdminDashboard, AdminRequests,
};
use crate::pages::customer::{
    CustomerDashboard, CustomerMeters, CustomerProfile, CustomerTransactions,
};
use crate::pages::{Login, Signup};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="app-shell">
                <Routes>
                    <Route path="/" view=Login />
                    <Route path="/login" view=Login />
                    <Route path="/signup" view=Signup />

                    <Route path="/admin/dashboard" view=AdminDashboard />
                    <Route path="/admin/customers" view=AdminCustomers />
                    <Route path="/admin/billing" view=AdminBilling />
                    <Route path="/admin/charges" view=AdminCharges />
                    <Route path="/admin/requests" view=AdminRequests />

                    <Route path="/customer/dashboard" view=CustomerDashboard />
                    <Route path="/customer/transactions" view=CustomerTransactions />
                    <Route path="/customer/meters" view=CustomerMeters />
                    <Route path="/customer/profile" view=CustomerProfile />

                    <Route path="/*any" view=NotFound />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p class="text-muted">"The page you're looking for doesn't exist."</p>
            <A href="/login" class="btn btn-primary">"Back to Login"</A>
        </div>
    }
}
