//! Customer Transactions Page
//!
//! The customer's bills with a pay action on outstanding rows. Payment
//! posts to the strict `/pay-bill` endpoint and refetches on success.

use leptos::*;

use crate::api;
use crate::api::PayBillRequest;
use crate::components::{CustomerSidebar, Loading, PageHeader, StatusBadge};
use crate::state::global::{Bill, GlobalState};
use crate::state::session;
use crate::stats;

async fn load_bills(customer_id: &str, bills: RwSignal<Vec<Bill>>, state: GlobalState) {
    match api::get_bills(customer_id).await {
        Ok(data) => bills.set(data),
        Err(e) => state.show_error(&e),
    }
}

#[component]
pub fn CustomerTransactions() -> impl IntoView {
    let customer_id = session::require_customer();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let bills = create_rw_signal(Vec::<Bill>::new());
    let (method, set_method) = create_signal("Credit Card".to_string());
    let (loading, set_loading) = create_signal(true);

    let id_for_effect = customer_id.clone();
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let Some(id) = id_for_effect.clone() else {
            return;
        };
        let state = state_for_effect.clone();
        spawn_local(async move {
            load_bills(&id, bills, state).await;
            set_loading.set(false);
        });
    });

    let id_for_pay = customer_id;
    let state_for_pay = state;
    let pay = move |bill: Bill| {
        let Some(id) = id_for_pay.clone() else {
            return;
        };
        let state = state_for_pay.clone();
        let request = PayBillRequest {
            bill_id: bill.bill_id,
            amount: bill.total_amount,
            payment_method: method.get(),
        };
        spawn_local(async move {
            match api::pay_bill(&request).await {
                Ok(response) if response.success => {
                    state.show_success("Payment recorded");
                    load_bills(&id, bills, state).await;
                }
                Ok(response) => {
                    let msg = response
                        .error
                        .or(response.message)
                        .unwrap_or_else(|| "Payment failed".to_string());
                    state.show_error(&msg);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="page-layout">
            <CustomerSidebar active_page="transactions" />
            <main class="main-content">
                <PageHeader title="Transactions" subtitle="Your bills and payments" />

                <div class="form-group method-picker">
                    <label>"Payment Method"</label>
                    <select on:change=move |ev| set_method.set(event_target_value(&ev))>
                        <option value="Credit Card">"Credit Card"</option>
                        <option value="Bank Transfer">"Bank Transfer"</option>
                        <option value="Cash">"Cash"</option>
                        <option value="EasyPaisa">"EasyPaisa"</option>
                    </select>
                </div>

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        let pay = pay.clone();
                        view! {
                            <section class="card">
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Bill ID"</th>
                                            <th>"Issued"</th>
                                            <th>"Due"</th>
                                            <th>"Amount"</th>
                                            <th>"Status"</th>
                                            <th>""</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            let pay = pay.clone();
                                            bills.get().into_iter().map(|b| {
                                                let pay = pay.clone();
                                                let payable = matches!(
                                                    b.payment_status.as_deref(),
                                                    Some("Unpaid") | Some("Pending")
                                                );
                                                let bill_for_pay = b.clone();
                                                view! {
                                                    <tr>
                                                        <td>{b.bill_id.clone()}</td>
                                                        <td>{b.issue_date.as_deref().map(stats::format_date).unwrap_or_else(|| "-".to_string())}</td>
                                                        <td>{b.due_date.as_deref().map(stats::format_date).unwrap_or_else(|| "-".to_string())}</td>
                                                        <td class="cell-primary">{stats::format_currency(b.total_amount)}</td>
                                                        <td>
                                                            <StatusBadge status=b.payment_status
                                                                .clone()
                                                                .unwrap_or_else(|| "Unknown".to_string()) />
                                                        </td>
                                                        <td>
                                                            {payable.then(|| view! {
                                                                <button
                                                                    class="btn btn-small btn-primary"
                                                                    on:click=move |_| pay(bill_for_pay.clone())
                                                                >
                                                                    "Pay Now"
                                                                </button>
                                                            })}
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
