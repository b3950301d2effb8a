//! Customer Dashboard Page
//!
//! Account summary for the logged-in customer: accounts, meters and
//! outstanding bills.

use leptos::*;

use crate::api;
use crate::components::{CustomerSidebar, Loading, PageHeader, StatusBadge};
use crate::state::global::{Account, Bill, GlobalState, Meter};
use crate::state::session;
use crate::stats;

#[component]
pub fn CustomerDashboard() -> impl IntoView {
    let customer_id = session::require_customer();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(None::<String>);
    let accounts = create_rw_signal(Vec::<Account>::new());
    let meters = create_rw_signal(Vec::<Meter>::new());
    let bills = create_rw_signal(Vec::<Bill>::new());
    let (loading, set_loading) = create_signal(true);

    let state_for_effect = state;
    create_effect(move |_| {
        // Redirect already underway when the gate failed
        let Some(id) = customer_id.clone() else {
            return;
        };
        let state = state_for_effect.clone();
        spawn_local(async move {
            if let Some(customer) = api::get_customer(&id).await {
                set_name.set(Some(customer.full_name()));
            }

            match api::get_customer_details(&id).await {
                Ok(details) => {
                    accounts.set(details.accounts);
                    meters.set(details.meters);
                }
                Err(e) => state.show_error(&e),
            }

            match api::get_bills(&id).await {
                Ok(data) => bills.set(data),
                Err(e) => state.show_error(&e),
            }

            set_loading.set(false);
        });
    });

    let outstanding = move || stats::pending_payments(&bills.get());
    let unpaid_bills = move || -> Vec<Bill> {
        bills
            .get()
            .into_iter()
            .filter(|b| {
                matches!(b.payment_status.as_deref(), Some("Unpaid") | Some("Pending"))
            })
            .collect()
    };

    view! {
        <div class="page-layout">
            <CustomerSidebar active_page="dashboard" />
            <main class="main-content">
                <PageHeader title="My Dashboard" subtitle="Your account at a glance" />

                <p class="welcome-line">
                    {move || {
                        name.get()
                            .map(|n| format!("Welcome back, {}", n))
                            .unwrap_or_else(|| "Welcome back".to_string())
                    }}
                </p>

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! {
                            <div class="stats-grid">
                                <div class="stat-card">
                                    <span class="stat-label">"Accounts"</span>
                                    <span class="stat-value">{move || accounts.get().len()}</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-label">"Meters"</span>
                                    <span class="stat-value">{move || meters.get().len()}</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-label">"Outstanding"</span>
                                    <span class="stat-value">
                                        {move || stats::format_currency(outstanding())}
                                    </span>
                                </div>
                            </div>

                            <section class="card">
                                <h2>"My Accounts"</h2>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Account"</th>
                                            <th>"Type"</th>
                                            <th>"Billing Cycle"</th>
                                            <th>"Since"</th>
                                            <th>"Balance"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            accounts.get().into_iter().map(|a| view! {
                                                <tr>
                                                    <td>{a.account_id.clone()}</td>
                                                    <td>{a.account_type.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>{a.billing_cycle.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>{a.service_start_date.as_deref().map(stats::format_date).unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>{a.balance.map(stats::format_currency).unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>
                                                        <StatusBadge status=a.status
                                                            .clone()
                                                            .unwrap_or_else(|| "Unknown".to_string()) />
                                                    </td>
                                                </tr>
                                            }).collect_view()
                                        }}
                                    </tbody>
                                </table>
                            </section>

                            <section class="card">
                                <h2>"Bills Due"</h2>
                                {move || {
                                    let due = unpaid_bills();
                                    if due.is_empty() {
                                        view! {
                                            <p class="text-muted">"Nothing outstanding. You're all caught up."</p>
                                        }.into_view()
                                    } else {
                                        due.into_iter().map(|b| view! {
                                            <div class="bill-row">
                                                <div>
                                                    <div class="cell-primary">{b.bill_id.clone()}</div>
                                                    <div class="cell-secondary">
                                                        "Due "
                                                        {b.due_date.as_deref().map(stats::format_date).unwrap_or_else(|| "-".to_string())}
                                                    </div>
                                                </div>
                                                <div class="bill-amount">
                                                    {stats::format_currency(b.total_amount)}
                                                </div>
                                                <StatusBadge status=b.payment_status
                                                    .clone()
                                                    .unwrap_or_else(|| "Unknown".to_string()) />
                                            </div>
                                        }).collect_view()
                                    }
                                }}
                            </section>
                        }.into_view()
                    }
                }}
            </main>
        </div>
    }
}
