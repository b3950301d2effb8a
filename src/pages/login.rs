//! Login Page
//!
//! Role picker (admin or customer) backed by the `/login` endpoint. A
//! successful login writes the session flags and navigates to the matching
//! dashboard; an unreachable backend surfaces the connection-error sentinel
//! instead of failing.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (role, set_role) = create_signal("customer".to_string());
    let (customer_id, set_customer_id) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (message, set_message) = create_signal(None::<String>);

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let role_value = role.get();
        let id = customer_id.get();

        set_submitting.set(true);
        set_message.set(None);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            let response = if role_value == "admin" {
                api::login("admin", None).await
            } else {
                api::login("customer", Some(&id)).await
            };

            if response.success {
                if role_value == "admin" {
                    session::login_admin();
                } else {
                    // Prefer the id echoed back by the backend
                    let confirmed = response
                        .user
                        .map(|u| u.customer_id)
                        .unwrap_or(id);
                    session::login_customer(&confirmed);
                }
            } else {
                let msg = response
                    .message
                    .unwrap_or_else(|| "Login failed".to_string());
                set_message.set(Some(msg.clone()));
                state_clone.show_error(&msg);
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="brand auth-brand">
                    <i class="fa-solid fa-bolt brand-icon"></i>
                    "PowerPay Portal"
                </div>

                // Role toggle
                <div class="role-toggle">
                    <RoleButton label="Customer" value="customer" current=role set_current=set_role />
                    <RoleButton label="Admin" value="admin" current=role set_current=set_role />
                </div>

                <form on:submit=on_submit class="auth-form">
                    {move || {
                        if role.get() == "customer" {
                            view! {
                                <div class="form-group">
                                    <label>"Customer ID"</label>
                                    <input
                                        type="text"
                                        placeholder="CUST-0001"
                                        prop:value=move || customer_id.get()
                                        on:input=move |ev| set_customer_id.set(event_target_value(&ev))
                                    />
                                </div>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}

                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                {move || {
                    message.get().map(|msg| view! {
                        <p class="auth-error">{msg}</p>
                    })
                }}

                <p class="auth-footer">
                    "New customer? "
                    <A href="/signup">"Create an account"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
fn RoleButton(
    label: &'static str,
    value: &'static str,
    current: ReadSignal<String>,
    set_current: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| set_current.set(value.to_string())
            class=move || {
                if current.get() == value {
                    "role-btn role-btn-active"
                } else {
                    "role-btn"
                }
            }
        >
            {label}
        </button>
    }
}
