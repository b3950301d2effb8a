//! Signup Page
//!
//! Customer registration form posting to `/signup`. The backend allocates
//! the customer and account ids; on success they are shown so the customer
//! can log in with them.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::SignupRequest;
use crate::state::global::GlobalState;

#[component]
pub fn Signup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (address, set_address) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (zip_code, set_zip_code) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (created_id, set_created_id) = create_signal(None::<String>);
    let (created_account, set_created_account) = create_signal(None::<String>);

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest {
            first_name: first_name.get(),
            last_name: last_name.get(),
            phone_number: phone.get(),
            email: email.get(),
            service_address: address.get(),
            city: city.get(),
            zip_code: zip_code.get(),
        };

        set_submitting.set(true);

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::signup(&request).await {
                Ok(response) if response.success => {
                    set_created_id.set(response.customer_id.clone());
                    set_created_account.set(response.account_id.clone());
                    state_clone.show_success("Account created");
                }
                Ok(response) => {
                    let msg = response
                        .error
                        .unwrap_or_else(|| "Signup failed".to_string());
                    state_clone.show_error(&msg);
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="brand auth-brand">
                    <i class="fa-solid fa-bolt brand-icon"></i>
                    "Create Account"
                </div>

                {move || {
                    match created_id.get() {
                        Some(id) => view! {
                            <div class="signup-done">
                                <p>"Your account is ready. Your customer ID is:"</p>
                                <p class="signup-id">{id}</p>
                                {move || {
                                    created_account.get().map(|acc| view! {
                                        <p class="text-muted">{format!("Account number: {}", acc)}</p>
                                    })
                                }}
                                <A href="/login" class="btn btn-primary">"Go to Login"</A>
                            </div>
                        }.into_view(),
                        None => view! {
                            <form on:submit=on_submit class="auth-form">
                                <div class="form-row">
                                    <TextField label="First Name" value=first_name set_value=set_first_name />
                                    <TextField label="Last Name" value=last_name set_value=set_last_name />
                                </div>
                                <TextField label="Phone Number" value=phone set_value=set_phone />
                                <TextField label="Email" value=email set_value=set_email />
                                <TextField label="Service Address" value=address set_value=set_address />
                                <div class="form-row">
                                    <TextField label="City" value=city set_value=set_city />
                                    <TextField label="Zip Code" value=zip_code set_value=set_zip_code />
                                </div>

                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || submitting.get()
                                >
                                    {move || if submitting.get() { "Creating..." } else { "Sign Up" }}
                                </button>
                            </form>
                        }.into_view(),
                    }
                }}

                <p class="auth-footer">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}
