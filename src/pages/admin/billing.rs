//! Admin Billing Page
//!
//! All bills with a per-row toggle between paid and unpaid. Bills come from
//! the strict `/bills` endpoint; a failure surfaces as an error toast and an
//! empty table.

use leptos::*;

use crate::api;
use crate::components::{AdminSidebar, Loading, PageHeader, StatusBadge};
use crate::state::global::{Bill, GlobalState};
use crate::state::session;
use crate::stats;

async fn load_bills(bills: RwSignal<Vec<Bill>>, state: GlobalState) {
    match api::get_bills("all").await {
        Ok(data) => bills.set(data),
        Err(e) => state.show_error(&e),
    }
}

#[component]
pub fn AdminBilling() -> impl IntoView {
    session::require_admin();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let bills = create_rw_signal(Vec::<Bill>::new());
    let (loading, set_loading) = create_signal(true);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            load_bills(bills, state).await;
            set_loading.set(false);
        });
    });

    let state_for_toggle = state;
    let toggle = move |bill_id: String| {
        let state = state_for_toggle.clone();
        spawn_local(async move {
            match api::toggle_bill_status(&bill_id).await {
                Ok(response) if response.success => {
                    state.show_success("Bill status updated");
                    load_bills(bills, state).await;
                }
                Ok(response) => {
                    let msg = response
                        .error
                        .unwrap_or_else(|| "Toggle failed".to_string());
                    state.show_error(&msg);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="page-layout">
            <AdminSidebar active_page="billing" />
            <main class="main-content">
                <PageHeader title="Billing" subtitle="All bills across accounts" />

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        let toggle = toggle.clone();
                        view! {
                            <section class="card">
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Bill ID"</th>
                                            <th>"Account"</th>
                                            <th>"Issued"</th>
                                            <th>"Due"</th>
                                            <th>"Amount"</th>
                                            <th>"Status"</th>
                                            <th>""</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            let toggle = toggle.clone();
                                            bills.get().into_iter().map(|b| {
                                                let toggle = toggle.clone();
                                                let bill_id = b.bill_id.clone();
                                                view! {
                                                    <tr>
                                                        <td>{b.bill_id.clone()}</td>
                                                        <td>{b.account_id.clone()}</td>
                                                        <td>{b.issue_date.as_deref().map(stats::format_date).unwrap_or_else(|| "-".to_string())}</td>
                                                        <td>{b.due_date.as_deref().map(stats::format_date).unwrap_or_else(|| "-".to_string())}</td>
                                                        <td class="cell-primary">{stats::format_currency(b.total_amount)}</td>
                                                        <td>
                                                            <StatusBadge status=b.payment_status
                                                                .clone()
                                                                .unwrap_or_else(|| "Unknown".to_string()) />
                                                        </td>
                                                        <td>
                                                            <button
                                                                class="btn btn-small"
                                                                on:click=move |_| toggle(bill_id.clone())
                                                            >
                                                                "Toggle"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
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
