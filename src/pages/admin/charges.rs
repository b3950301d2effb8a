//! Admin Charges Page
//!
//! Tariff table from `/charges` with inline editing, saved back wholesale
//! through the PUT endpoint. No client-side validation: whatever parses as
//! a number is sent.

use leptos::*;

use crate::api;
use crate::components::{AdminSidebar, Loading, PageHeader};
use crate::state::global::{Charges, GlobalState};
use crate::state::session;

#[component]
pub fn AdminCharges() -> impl IntoView {
    session::require_admin();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let charges = create_rw_signal(Vec::<Charges>::new());
    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::get_charges().await {
                Ok(data) => charges.set(data),
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let state_for_save = state;
    let on_save = move |_| {
        set_saving.set(true);
        let current = charges.get();
        let state = state_for_save.clone();
        spawn_local(async move {
            match api::update_charges(&current).await {
                Ok(response) if response.success => {
                    state.show_success("Charges updated");
                }
                Ok(response) => {
                    let msg = response
                        .error
                        .unwrap_or_else(|| "Update failed".to_string());
                    state.show_error(&msg);
                }
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page-layout">
            <AdminSidebar active_page="charges" />
            <main class="main-content">
                <PageHeader title="Charges" subtitle="Tariff rates per utility" />

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! {
                            <section class="card">
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Utility"</th>
                                            <th>"Rate / Unit"</th>
                                            <th>"Fixed Charge"</th>
                                            <th>"Tax %"</th>
                                            <th>"Service Fee"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        // Untracked read: keystrokes update the signal and must not
                                        // rebuild the row inputs out from under the cursor
                                        {move || {
                                            charges.with_untracked(|c| c.clone()).into_iter().enumerate().map(|(idx, row)| view! {
                                                <tr>
                                                    <td class="cell-primary">{row.utility_type.clone()}</td>
                                                    <td>
                                                        <RateInput
                                                            charges=charges
                                                            idx=idx
                                                            value=row.rate_per_unit
                                                            apply=|row, v| row.rate_per_unit = v
                                                        />
                                                    </td>
                                                    <td>
                                                        <RateInput
                                                            charges=charges
                                                            idx=idx
                                                            value=row.fixed_charge
                                                            apply=|row, v| row.fixed_charge = v
                                                        />
                                                    </td>
                                                    <td>
                                                        <RateInput
                                                            charges=charges
                                                            idx=idx
                                                            value=row.tax_percentage
                                                            apply=|row, v| row.tax_percentage = v
                                                        />
                                                    </td>
                                                    <td>
                                                        <RateInput
                                                            charges=charges
                                                            idx=idx
                                                            value=row.service_fee
                                                            apply=|row, v| row.service_fee = v
                                                        />
                                                    </td>
                                                </tr>
                                            }).collect_view()
                                        }}
                                    </tbody>
                                </table>

                                <button
                                    class="btn btn-primary"
                                    disabled=move || saving.get()
                                    on:click=on_save.clone()
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                                </button>
                            </section>
                        }.into_view()
                    }
                }}
            </main>
        </div>
    }
}

/// Numeric cell editor writing straight into the charges signal.
#[component]
fn RateInput(
    charges: RwSignal<Vec<Charges>>,
    idx: usize,
    value: f64,
    apply: fn(&mut Charges, f64),
) -> impl IntoView {
    view! {
        <input
            type="number"
            step="0.01"
            class="rate-input"
            prop:value=value.to_string()
            on:input=move |ev| {
                if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                    charges.update(|list| {
                        if let Some(row) = list.get_mut(idx) {
                            apply(row, parsed);
                        }
                    });
                }
            }
        />
    }
}
