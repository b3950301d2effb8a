//! PowerPay Portal
//!
//! Browser frontend for a utility billing admin and customer portal,
//! built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the PowerPay backend over HTTP and simulates
//! login state through local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod stats;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
