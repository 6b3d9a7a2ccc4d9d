//! Navigation Component
//!
//! Header navigation bar with brand link, session-aware links and logout.

use leptos::*;
use leptos_router::*;

use crate::state::session::SessionState;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let user = session.user;

    let session_for_logout = session.clone();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🩺"</span>
                        <span class="text-xl font-bold text-white">"Moj Termin"</span>
                    </A>

                    // Session-aware links
                    <div class="flex items-center space-x-1">
                        {move || {
                            user.get().map(|_| view! {
                                <NavLink href="/subs" label="My Subscriptions" />
                            })
                        }}

                        {move || {
                            match user.get() {
                                Some(current) => {
                                    let session = session_for_logout.clone();
                                    view! {
                                        <span class="px-4 py-2 text-gray-300">
                                            {format!("Hi, {}!", current.username)}
                                        </span>
                                        <button
                                            on:click=move |_| session.logout()
                                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                        >
                                            "Logout"
                                        </button>
                                    }.into_view()
                                }
                                None => view! {
                                    <NavLink href="/login" label="Login" />
                                    <NavLink href="/register" label="Register" />
                                }.into_view(),
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
