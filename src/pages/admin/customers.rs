//! Admin Customers Page
//!
//! Customer table from the degraded `/customers` endpoint. When the backend
//! is unreachable the mock dataset is rendered with an offline banner.

use leptos::*;

use crate::api;
use crate::components::{AdminSidebar, Loading, PageHeader, StatusBadge};
use crate::state::global::Customer;
use crate::state::session;

#[component]
pub fn AdminCustomers() -> impl IntoView {
    session::require_admin();

    let customers = create_rw_signal(Vec::<Customer>::new());
    let offline = create_rw_signal(false);
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            let fetched = api::get_customers().await;
            offline.set(fetched.is_fallback());
            customers.set(fetched.into_data());
            set_loading.set(false);
        });
    });

    view! {
        <div class="page-layout">
            <AdminSidebar active_page="customers" />
            <main class="main-content">
                <PageHeader title="Customers" subtitle="All registered customers" />

                {move || {
                    if offline.get() {
                        view! {
                            <div class="offline-banner">
                                "Backend unreachable - showing offline sample data"
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! {
                            <section class="card">
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"ID"</th>
                                            <th>"Name"</th>
                                            <th>"Phone"</th>
                                            <th>"City"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            customers.get().into_iter().map(|c| view! {
                                                <tr>
                                                    <td>{c.customer_id.clone()}</td>
                                                    <td>
                                                        <div class="cell-primary">{c.full_name()}</div>
                                                        <div class="cell-secondary">
                                                            {c.email.clone().unwrap_or_else(|| "-".to_string())}
                                                        </div>
                                                    </td>
                                                    <td>{c.phone_number.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>{c.city.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>
                                                        <StatusBadge status=c.account_status
                                                            .clone()
                                                            .unwrap_or_else(|| "Unknown".to_string()) />
                                                    </td>
                                                </tr>
                                            }).collect_view()
                                        }}
                                    </tbody>
                                </table>
                            </section>
                        }.into_view()
                    }
                }}
            </main>
        </div>
    }
}
