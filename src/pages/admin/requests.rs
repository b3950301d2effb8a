//! Admin Requests Page
//!
//! Service request queue with approve and reject actions. Approving a
//! connection request tells the backend to provision the meter via the
//! `action` field.

use leptos::*;

use crate::api;
use crate::components::{AdminSidebar, Loading, PageHeader, StatusBadge};
use crate::state::global::{GlobalState, ServiceRequest};
use crate::state::session;
use crate::stats;

async fn load_requests(requests: RwSignal<Vec<ServiceRequest>>, state: GlobalState) {
    match api::get_requests().await {
        Ok(data) => requests.set(data),
        Err(e) => state.show_error(&e),
    }
}

#[component]
pub fn AdminRequests() -> impl IntoView {
    session::require_admin();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let requests = create_rw_signal(Vec::<ServiceRequest>::new());
    let (loading, set_loading) = create_signal(true);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            load_requests(requests, state).await;
            set_loading.set(false);
        });
    });

    let state_for_update = state;
    let resolve = move |request_id: String, status: &'static str| {
        let state = state_for_update.clone();
        spawn_local(async move {
            // Approvals provision the requested connection
            let action = if status == "Approved" { Some("connect") } else { None };
            match api::update_request(&request_id, status, action).await {
                Ok(response) if response.success => {
                    state.show_success(&format!("Request {}", status.to_lowercase()));
                    load_requests(requests, state).await;
                }
                Ok(response) => {
                    let msg = response
                        .error
                        .or(response.message)
                        .unwrap_or_else(|| "Update failed".to_string());
                    state.show_error(&msg);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="page-layout">
            <AdminSidebar active_page="requests" />
            <main class="main-content">
                <PageHeader title="Requests" subtitle="Pending service requests" />

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        let resolve = resolve.clone();
                        view! {
                            <section class="card">
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Request ID"</th>
                                            <th>"Customer"</th>
                                            <th>"Utility"</th>
                                            <th>"Date"</th>
                                            <th>"Status"</th>
                                            <th>""</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            let resolve = resolve.clone();
                                            requests.get().into_iter().map(|r| {
                                                let approve = resolve.clone();
                                                let reject = resolve.clone();
                                                let approve_id = r.request_id.clone();
                                                let reject_id = r.request_id.clone();
                                                let is_pending = r.status.as_deref() == Some("Pending");
                                                view! {
                                                    <tr>
                                                        <td>{r.request_id.clone()}</td>
                                                        <td>{r.customer_id.clone()}</td>
                                                        <td>{r.utility_type.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                        <td>{r.request_date.as_deref().map(stats::format_date).unwrap_or_else(|| "-".to_string())}</td>
                                                        <td>
                                                            <StatusBadge status=r.status
                                                                .clone()
                                                                .unwrap_or_else(|| "Pending".to_string()) />
                                                        </td>
                                                        <td>
                                                            {is_pending.then(|| view! {
                                                                <button
                                                                    class="btn btn-small btn-primary"
                                                                    on:click=move |_| approve(approve_id.clone(), "Approved")
                                                                >
                                                                    "Approve"
                                                                </button>
                                                                <button
                                                                    class="btn btn-small"
                                                                    on:click=move |_| reject(reject_id.clone(), "Rejected")
                                                                >
                                                                    "Reject"
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
