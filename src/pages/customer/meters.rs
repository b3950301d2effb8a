//! Customer Meters Page
//!
//! Meters installed on the customer's accounts, from `/meters/{customerId}`.

use leptos::*;

use crate::api;
use crate::components::{CustomerSidebar, Loading, PageHeader, StatusBadge};
use crate::state::global::{GlobalState, Meter};
use crate::state::session;
use crate::stats;

#[component]
pub fn CustomerMeters() -> impl IntoView {
    let customer_id = session::require_customer();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let meters = create_rw_signal(Vec::<Meter>::new());
    let (loading, set_loading) = create_signal(true);

    let state_for_effect = state;
    create_effect(move |_| {
        let Some(id) = customer_id.clone() else {
            return;
        };
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::get_meters(&id).await {
                Ok(data) => meters.set(data),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page-layout">
            <CustomerSidebar active_page="mymeters" />
            <main class="main-content">
                <PageHeader title="My Meters" subtitle="Meters on your accounts" />

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! {
                            <section class="card">
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Meter ID"</th>
                                            <th>"Account"</th>
                                            <th>"Type"</th>
                                            <th>"Installed"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            let rows = meters.get();
                                            if rows.is_empty() {
                                                view! {
                                                    <tr>
                                                        <td colspan="5" class="text-muted">
                                                            "No meters installed yet"
                                                        </td>
                                                    </tr>
                                                }.into_view()
                                            } else {
                                                rows.into_iter().map(|m| view! {
                                                    <tr>
                                                        <td>{m.meter_id.clone()}</td>
                                                        <td>{m.account_id.clone()}</td>
                                                        <td>{m.meter_type.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                        <td>{m.installation_date.as_deref().map(stats::format_date).unwrap_or_else(|| "-".to_string())}</td>
                                                        <td>
                                                            <StatusBadge status=m.status
                                                                .clone()
                                                                .unwrap_or_else(|| "Unknown".to_string()) />
                                                        </td>
                                                    </tr>
                                                }).collect_view()
                                            }
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
