//! Doctor Slots Page
//!
//! Available time slots for the doctor in the route, with a subscribe
//! button for logged-in users.

use leptos::*;
use leptos_router::use_params_map;

use crate::api;
use crate::components::ListSkeleton;
use crate::fetch::{FetchState, RequestToken};
use crate::state::session::SessionState;

/// Available-slots page for one doctor
#[component]
pub fn DoctorSlots() -> impl IntoView {
    let params = use_params_map();
    let session = use_context::<SessionState>().expect("SessionState not found");

    let doctor = create_rw_signal(None::<api::Doctor>);
    let slots = FetchState::<Vec<api::TimeSlot>>::new();
    let guard = RequestToken::new();

    // Refetch whenever the route's doctor id changes. A reply that comes
    // back after the id has changed again carries a stale token and is
    // dropped.
    let session_for_effect = session.clone();
    let guard_for_effect = guard;
    create_effect(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

        let Some(id) = id else {
            slots.resolve(Vec::new());
            return;
        };

        slots.begin();
        let token = guard_for_effect.issue();
        let guard = guard_for_effect.clone();
        let session = session_for_effect.clone();
        spawn_local(async move {
            let detail = api::fetch_doctor(id).await;
            let listing = api::fetch_timeslots(id).await;

            if !guard.is_current(token) {
                return;
            }

            match detail {
                Ok(found) => doctor.set(Some(found)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch doctor {}: {}", id, e).into(),
                    );
                }
            }

            match listing {
                Ok(list) => slots.resolve(list),
                Err(_) => {
                    slots.fail();
                    session.show_error("Could not load time slots");
                }
            }
        });
    });

    // Subscribe to openings for this doctor
    let (subscribing, set_subscribing) = create_signal(false);
    let user = session.user;
    let session_for_subscribe = session;
    let on_subscribe = move |_| {
        let Some(found) = doctor.get() else { return };
        let Some(token) = session_for_subscribe.auth_token() else {
            session_for_subscribe.show_error("Log in to subscribe");
            return;
        };

        set_subscribing.set(true);
        let session = session_for_subscribe.clone();
        spawn_local(async move {
            match api::subscribe(&token, found.id).await {
                Ok(_) => session.show_success(&format!("Subscribed to {}", found.full_name)),
                Err(e) => session.show_error(e.detail().unwrap_or("Subscription failed")),
            }
            set_subscribing.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">
                {move || match doctor.get() {
                    Some(found) => format!("Available slots for {}", found.full_name),
                    None => "Available slots".to_string(),
                }}
            </h1>

            {move || {
                let on_subscribe = on_subscribe.clone();
                user.get().map(|_| view! {
                    <button
                        on:click=on_subscribe
                        disabled=move || subscribing.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if subscribing.get() { "Subscribing..." } else { "Notify me about openings" }}
                    </button>
                })
            }}

            // Slot listing
            {move || {
                if slots.loading.get() {
                    view! { <ListSkeleton count=4 /> }.into_view()
                } else {
                    let list = slots.data.get();
                    if list.is_empty() {
                        view! { <p class="text-gray-400">"No available slots."</p> }.into_view()
                    } else {
                        view! {
                            <ul class="space-y-2">
                                {list.into_iter().map(|slot| {
                                    view! {
                                        <li class="bg-gray-800 border border-gray-700 rounded-lg px-4 py-3">
                                            {format_slot(&slot.free_slot.with_timezone(&chrono::Local))}
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Weekday plus date and time, e.g. "Friday, 10/01/2025 14:30".
fn format_slot<Tz: chrono::TimeZone>(instant: &chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%A, %d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_slot_shows_weekday_date_and_time() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 10, 14, 30, 0).unwrap();
        assert_eq!(format_slot(&instant), "Friday, 10/01/2025 14:30");
    }
}
