//! Login Page
//!
//! Shows the login form, or a welcome card with logout when a session
//! already exists.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::session::SessionState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let user = session.user;

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            {move || {
                match user.get() {
                    Some(current) => view! { <WelcomeCard username=current.username /> }.into_view(),
                    None => view! { <LoginForm /> }.into_view(),
                }
            }}
        </div>
    }
}

/// Card shown to an already-logged-in visitor
#[component]
fn WelcomeCard(#[prop(into)] username: String) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <div class="bg-gray-800 rounded-xl p-6 w-full max-w-sm text-center">
            <h2 class="text-xl font-semibold">{format!("Welcome, {}", username)}</h2>
            <button
                on:click=move |_| session.logout()
                class="mt-4 w-full px-4 py-3 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
            >
                "Logout"
            </button>
        </div>
    }
}

/// Username/password login form
#[component]
fn LoginForm() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let session_for_submit = session;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let u = username.get();
        let p = password.get();
        if u.is_empty() || p.is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }

        set_submitting.set(true);

        let session = session_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&u, &p).await {
                Ok(response) => {
                    session.login(response.user, &response.token);
                    navigate("/", Default::default());
                }
                Err(_) => {
                    set_error.set(Some(
                        "Login failed. Please check your username and password.".to_string(),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 w-full max-w-sm">
            <h2 class="text-xl font-semibold text-center mb-6">"Login"</h2>

            // Error shown next to the form, not as a toast
            {move || error.get().map(|msg| view! {
                <div class="bg-red-900/50 border border-red-700 text-red-200 rounded-lg px-4 py-3 mb-4 text-sm">
                    {msg}
                </div>
            })}

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
