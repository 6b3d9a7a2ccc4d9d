//! Moj Termin Subscriber
//!
//! Browser client for a doctor-appointment subscription service, built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Doctor directory with available time slots
//! - Account registration and login
//! - Subscriptions to a doctor's openings
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is a thin presentation layer over the Moj Termin REST
//! API: pages fetch through the repository functions in [`api`] and keep
//! only transient per-view state, plus the persisted login session.

use leptos::*;

mod api;
mod app;
mod components;
mod fetch;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
