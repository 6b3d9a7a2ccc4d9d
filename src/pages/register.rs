//! Register Page
//!
//! Account registration form. A successful registration shows the server's
//! confirmation, then moves to the login page.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (message, set_message) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_message.set(None);

        let mail = email.get();
        let user = username.get();
        let pass = password.get();
        if mail.is_empty() || user.is_empty() || pass.is_empty() {
            set_error.set(Some("All fields are required".to_string()));
            return;
        }

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&mail, &user, &pass).await {
                Ok(confirmation) => {
                    set_message.set(Some(confirmation));

                    // Give the confirmation a moment before moving on
                    gloo_timers::callback::Timeout::new(1000, move || {
                        navigate("/login", Default::default());
                    })
                    .forget();
                }
                Err(e) => {
                    set_error.set(Some(e.detail().unwrap_or("Registration failed").to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-sm">
                <h2 class="text-xl font-semibold text-center mb-6">"Register"</h2>

                {move || message.get().map(|msg| view! {
                    <div class="bg-green-900/50 border border-green-700 text-green-200 rounded-lg px-4 py-3 mb-4 text-sm">
                        {msg}
                    </div>
                })}

                {move || error.get().map(|msg| view! {
                    <div class="bg-red-900/50 border border-red-700 text-red-200 rounded-lg px-4 py-3 mb-4 text-sm">
                        {msg}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            placeholder="Choose a username"
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
                            placeholder="Create a password"
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
                        {move || if submitting.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
