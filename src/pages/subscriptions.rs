//! Subscriptions Page
//!
//! The logged-in user's subscriptions, with unsubscribe.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::fetch::FetchState;
use crate::state::session::SessionState;

/// My-subscriptions page component
#[component]
pub fn Subscriptions() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let subs = FetchState::<Vec<api::Subscription>>::new();
    let doctors = FetchState::<Vec<api::Doctor>>::new();

    // Doctor directory, for display names on the cards
    create_effect(move |_| {
        doctors.begin();
        spawn_local(async move {
            match api::fetch_doctors().await {
                Ok(list) => doctors.resolve(list),
                Err(e) => {
                    doctors.fail();
                    web_sys::console::error_1(&format!("Failed to fetch doctors: {}", e).into());
                }
            }
        });
    });

    // Subscription listing, shared by the session effect and unsubscribe
    let session_for_load = session.clone();
    let load = move || {
        let Some(token) = session_for_load.auth_token() else {
            subs.resolve(Vec::new());
            return;
        };

        subs.begin();
        let session = session_for_load.clone();
        spawn_local(async move {
            match api::fetch_my_subscriptions(&token).await {
                Ok(list) => subs.resolve(list),
                Err(_) => {
                    subs.fail();
                    session.show_error("Could not load subscriptions");
                }
            }
        });
    };

    // Without a logged-in user there is nothing to fetch
    let user = session.user;
    let load_for_effect = load.clone();
    create_effect(move |_| {
        if user.with(|u| u.is_some()) {
            load_for_effect();
        } else {
            subs.resolve(Vec::new());
        }
    });

    let reload = load;
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-center">"My Subscriptions"</h1>

            {move || {
                if user.with(|u| u.is_none()) {
                    view! {
                        <p class="text-center text-gray-400 py-12">
                            "Log in to see your subscriptions."
                        </p>
                    }.into_view()
                } else if subs.loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    let list = subs.data.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">
                                "You have no subscriptions yet."
                            </p>
                        }.into_view()
                    } else {
                        let directory = doctors.data.get();
                        view! {
                            <div class="grid md:grid-cols-2 gap-4">
                                {list.into_iter().map(|sub| {
                                    let doctor = directory
                                        .iter()
                                        .find(|d| d.id == sub.doctor_id)
                                        .cloned();
                                    view! {
                                        <SubscriptionCard
                                            subscription=sub
                                            doctor=doctor
                                            on_removed=reload.clone()
                                        />
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Card for one subscription, resolving the doctor's display name from the
/// directory listing.
#[component]
fn SubscriptionCard(
    subscription: api::Subscription,
    doctor: Option<api::Doctor>,
    on_removed: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (removing, set_removing) = create_signal(false);

    let display_name = doctor
        .as_ref()
        .map(|d| d.full_name.clone())
        .unwrap_or_else(|| "Unknown doctor".to_string());
    let doctor_label = doctor
        .map(|d| d.id.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let sub_id = subscription.id;
    let on_unsubscribe = move |_| {
        let Some(token) = session.auth_token() else { return };

        set_removing.set(true);
        let session = session.clone();
        let on_removed = on_removed.clone();
        spawn_local(async move {
            match api::unsubscribe(&token, sub_id).await {
                Ok(()) => {
                    session.show_success("Subscription removed");
                    on_removed();
                }
                Err(e) => {
                    session.show_error(e.detail().unwrap_or("Could not unsubscribe"));
                }
            }
            set_removing.set(false);
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="font-semibold text-lg">{display_name}</h3>
                    <p class="text-gray-400 text-sm mt-1">"Doctor ID: "{doctor_label}</p>
                </div>

                <button
                    on:click=on_unsubscribe
                    disabled=move || removing.get()
                    class="px-3 py-2 bg-red-600 hover:bg-red-700 disabled:bg-gray-600
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || if removing.get() { "Removing..." } else { "Unsubscribe" }}
                </button>
            </div>
        </div>
    }
}
