//! Customer Profile Page
//!
//! Contact details, new service requests and the account deletion check.

use leptos::*;

use crate::api;
use crate::components::{CustomerSidebar, PageHeader};
use crate::state::global::{Customer, GlobalState, ServiceRequest};
use crate::state::session;

#[component]
pub fn CustomerProfile() -> impl IntoView {
    let customer_id = session::require_customer();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (customer, set_customer) = create_signal(None::<Customer>);
    let (utility, set_utility) = create_signal("Electricity".to_string());
    let (requesting, set_requesting) = create_signal(false);
    let (deletion_note, set_deletion_note) = create_signal(None::<String>);

    let id_for_effect = customer_id.clone();
    create_effect(move |_| {
        let Some(id) = id_for_effect.clone() else {
            return;
        };
        spawn_local(async move {
            set_customer.set(api::get_customer(&id).await);
        });
    });

    let id_for_request = customer_id.clone();
    let state_for_request = state.clone();
    let submit_request = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = id_for_request.clone() else {
            return;
        };

        let request = ServiceRequest {
            request_id: format!("REQ-{}", chrono::Utc::now().timestamp_millis()),
            customer_id: id,
            utility_type: Some(utility.get()),
            status: Some("Pending".to_string()),
            request_date: None,
        };

        set_requesting.set(true);
        let state = state_for_request.clone();
        spawn_local(async move {
            match api::create_request(&request).await {
                Ok(response) if response.success => {
                    state.show_success("Service request submitted");
                }
                Ok(response) => {
                    let msg = response
                        .error
                        .unwrap_or_else(|| "Request failed".to_string());
                    state.show_error(&msg);
                }
                Err(e) => state.show_error(&e),
            }
            set_requesting.set(false);
        });
    };

    let id_for_check = customer_id;
    let state_for_check = state;
    let check_deletion = move |_| {
        let Some(id) = id_for_check.clone() else {
            return;
        };
        let state = state_for_check.clone();
        spawn_local(async move {
            match api::check_deletion_eligibility(&id).await {
                Ok(check) => {
                    let note = if check.eligible {
                        check.message.unwrap_or_else(|| {
                            "Your account can be closed. Contact support to proceed.".to_string()
                        })
                    } else {
                        check.message.unwrap_or_else(|| {
                            "Account cannot be closed while bills are outstanding.".to_string()
                        })
                    };
                    set_deletion_note.set(Some(note));
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="page-layout">
            <CustomerSidebar active_page="profile" />
            <main class="main-content">
                <PageHeader title="Settings" subtitle="Your profile and services" />

                <section class="card">
                    <h2>"Contact Details"</h2>
                    {move || {
                        match customer.get() {
                            Some(c) => view! {
                                <dl class="detail-list">
                                    <dt>"Name"</dt>
                                    <dd>{c.full_name()}</dd>
                                    <dt>"Customer ID"</dt>
                                    <dd>{c.customer_id.clone()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{c.email.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"Phone"</dt>
                                    <dd>{c.phone_number.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"Service Address"</dt>
                                    <dd>{c.service_address.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"City"</dt>
                                    <dd>{c.city.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"Zip Code"</dt>
                                    <dd>{c.zip_code.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                </dl>
                            }.into_view(),
                            None => view! {
                                <p class="text-muted">"Profile not available"</p>
                            }.into_view(),
                        }
                    }}
                </section>

                <section class="card">
                    <h2>"Request a Connection"</h2>
                    <form on:submit=submit_request class="inline-form">
                        <select on:change=move |ev| set_utility.set(event_target_value(&ev))>
                            <option value="Electricity">"Electricity"</option>
                            <option value="Gas">"Gas"</option>
                            <option value="Water">"Water"</option>
                        </select>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || requesting.get()
                        >
                            {move || if requesting.get() { "Submitting..." } else { "Submit Request" }}
                        </button>
                    </form>
                </section>

                <section class="card">
                    <h2>"Close Account"</h2>
                    <button class="btn" on:click=check_deletion>
                        "Check Eligibility"
                    </button>
                    {move || {
                        deletion_note.get().map(|note| view! {
                            <p class="deletion-note">{note}</p>
                        })
                    }}
                </section>
            </main>
        </div>
    }
}
