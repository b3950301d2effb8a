//! Admin Dashboard Page
//!
//! Overview cards, monthly revenue series and the recent payments table.
//! Cards prefer the precomputed `/admin/stats` numbers and fall back to
//! client-side aggregation when that endpoint fails. The payment history
//! has no read endpoint, so the revenue chart and recent table always draw
//! from the bundled sample payments unless the stats response carries them.

use leptos::*;

use crate::api;
use crate::api::mock;
use crate::api::AdminStats;
use crate::components::{AdminSidebar, Loading, PageHeader};
use crate::state::global::{Bill, Customer, GlobalState, Payment};
use crate::state::session;
use crate::stats;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    session::require_admin();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let customers = create_rw_signal(Vec::<Customer>::new());
    let bills = create_rw_signal(Vec::<Bill>::new());
    let server_stats = create_rw_signal(None::<AdminStats>);
    let offline = create_rw_signal(false);
    let (loading, set_loading) = create_signal(true);

    let state_for_effect = state;
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            let fetched = api::get_customers().await;
            offline.set(fetched.is_fallback());
            customers.set(fetched.into_data());

            match api::get_bills("all").await {
                Ok(data) => bills.set(data),
                Err(e) => state.show_error(&e),
            }

            match api::get_admin_stats().await {
                Ok(data) => server_stats.set(Some(data)),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("Stats unavailable, computing locally: {}", e).into(),
                    );
                }
            }

            set_loading.set(false);
        });
    });

    // Payment history fed into the chart and recent table
    let payments = move || -> Vec<Payment> {
        match server_stats.get() {
            Some(ref s) if !s.recent_payments.is_empty() => s.recent_payments.clone(),
            _ => mock::payments(),
        }
    };

    let total_customers = move || match server_stats.get() {
        Some(s) => s.total_customers as usize,
        None => stats::total_customers(&customers.get()),
    };
    let active_accounts = move || match server_stats.get() {
        Some(s) => s.active_accounts as usize,
        None => stats::active_accounts(&customers.get()),
    };
    let total_revenue = move || match server_stats.get() {
        Some(s) => s.total_revenue,
        None => stats::total_revenue(&payments()),
    };
    let pending = move || match server_stats.get() {
        Some(s) => s.pending_payments,
        None => stats::pending_payments(&bills.get()),
    };

    view! {
        <div class="page-layout">
            <AdminSidebar active_page="dashboard" />
            <main class="main-content">
                <PageHeader title="Dashboard" />

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
                            <div class="stats-grid">
                                <StatCard
                                    label="Total Customers"
                                    value=Signal::derive(move || total_customers().to_string())
                                />
                                <StatCard
                                    label="Active Accounts"
                                    value=Signal::derive(move || active_accounts().to_string())
                                />
                                <StatCard
                                    label="Total Revenue"
                                    value=Signal::derive(move || stats::format_currency(total_revenue()))
                                />
                                <StatCard
                                    label="Pending Payments"
                                    value=Signal::derive(move || stats::format_currency(pending()))
                                />
                            </div>

                            <section class="card">
                                <h2>"Monthly Revenue"</h2>
                                <RevenueBars payments=Signal::derive(payments) />
                            </section>

                            <section class="card">
                                <h2>"Recent Payments"</h2>
                                <RecentPaymentsTable payments=Signal::derive(payments) />
                            </section>
                        }.into_view()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}

/// Bar series of monthly revenue buckets, in first-seen order.
#[component]
fn RevenueBars(
    #[prop(into)]
    payments: Signal<Vec<Payment>>,
) -> impl IntoView {
    view! {
        <div class="revenue-bars">
            {move || {
                let series = stats::monthly_revenue(&payments.get());
                let max = series
                    .iter()
                    .map(|(_, v)| *v)
                    .fold(f64::NEG_INFINITY, f64::max);

                if series.is_empty() {
                    return view! {
                        <p class="text-muted">"No payment history"</p>
                    }.into_view();
                }

                series.into_iter().map(|(label, value)| {
                    let height = if max > 0.0 {
                        (value / max * 100.0) as i32
                    } else {
                        0
                    };
                    view! {
                        <div class="revenue-bar-col" title=stats::format_currency(value)>
                            <div
                                class="revenue-bar"
                                style=format!("height: {}%", height.max(2))
                            ></div>
                            <span class="revenue-bar-label">{label}</span>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn RecentPaymentsTable(
    #[prop(into)]
    payments: Signal<Vec<Payment>>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Payment ID"</th>
                    <th>"Bill ID"</th>
                    <th>"Date"</th>
                    <th>"Amount"</th>
                    <th>"Method"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    stats::recent_payments(&payments.get()).into_iter().map(|p| view! {
                        <tr>
                            <td>{p.payment_id}</td>
                            <td>{p.bill_id}</td>
                            <td>{stats::format_date(&p.payment_date)}</td>
                            <td>{stats::format_currency(p.payment_amount)}</td>
                            <td>{p.payment_method.unwrap_or_else(|| "-".to_string())}</td>
                        </tr>
                    }).collect_view()
                }}
            </tbody>
        </table>
    }
}
