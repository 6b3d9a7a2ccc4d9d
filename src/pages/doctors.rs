//! Doctors Page
//!
//! The doctor directory with the add-doctor form.

use leptos::*;

use crate::api;
use crate::components::{DoctorCard, Loading};
use crate::fetch::FetchState;
use crate::state::session::SessionState;

/// Doctor directory page
#[component]
pub fn Doctors() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let doctors = FetchState::<Vec<api::Doctor>>::new();

    // Listing fetch, shared by the mount effect and the add form's refetch
    let session_for_load = session.clone();
    let load = move || {
        doctors.begin();
        let session = session_for_load.clone();
        spawn_local(async move {
            match api::fetch_doctors().await {
                Ok(list) => doctors.resolve(list),
                Err(e) => {
                    doctors.fail();
                    web_sys::console::error_1(&format!("Failed to fetch doctors: {}", e).into());
                    session.show_error("Could not load doctors");
                }
            }
        });
    };

    // Fetch on mount
    let load_for_effect = load.clone();
    create_effect(move |_| load_for_effect());

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Available Doctors"</h1>
                <p class="text-gray-400 mt-1">"Browse doctors and their open appointment slots"</p>
            </div>

            // Doctor cards
            {move || {
                if doctors.loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    let list = doctors.data.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-12">
                                "No doctors yet. Add one below!"
                            </p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {list.into_iter().map(|doctor| {
                                    view! { <DoctorCard doctor=doctor /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}

            <hr class="border-gray-700" />

            <AddDoctorForm on_added=load />
        </div>
    }
}

/// Add-doctor form. The listing is refetched through `on_added` after a
/// successful add.
#[component]
fn AddDoctorForm(on_added: impl Fn() + 'static + Clone) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (doctor_id, set_doctor_id) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let session_for_submit = session;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // No request leaves the page without a usable id
        let id = match parse_doctor_id(&doctor_id.get()) {
            Ok(id) => id,
            Err(message) => {
                session_for_submit.show_error(message);
                return;
            }
        };

        set_submitting.set(true);

        let session = session_for_submit.clone();
        let on_added = on_added.clone();
        spawn_local(async move {
            match api::add_doctor(id).await {
                Ok(doctor) => {
                    set_doctor_id.set(String::new());
                    session.show_success(&format!("Added {}", doctor.full_name));
                    on_added();
                }
                Err(e) => {
                    session.show_error(e.detail().unwrap_or("Could not add doctor"));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="max-w-md mx-auto">
            <h2 class="text-xl font-semibold text-center mb-4">"Add a New Doctor"</h2>

            <form on:submit=on_submit class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Enter doctor's ID"
                    prop:value=move || doctor_id.get()
                    on:input=move |ev| set_doctor_id.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Adding..." } else { "Add Doctor" }}
                </button>
            </form>
        </section>
    }
}

/// Validate the add-doctor input. An empty value and a non-numeric value
/// both stay local; the message is shown instead of issuing a request.
fn parse_doctor_id(raw: &str) -> Result<i64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Doctor ID is required");
    }
    trimmed.parse().map_err(|_| "Doctor ID must be a number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_doctor_id_accepts_a_numeric_id() {
        assert_eq!(parse_doctor_id("42"), Ok(42));
        assert_eq!(parse_doctor_id("  7 "), Ok(7));
    }

    #[test]
    fn test_parse_doctor_id_rejects_empty_input() {
        assert_eq!(parse_doctor_id(""), Err("Doctor ID is required"));
        assert_eq!(parse_doctor_id("   "), Err("Doctor ID is required"));
    }

    #[test]
    fn test_parse_doctor_id_rejects_non_numeric_input() {
        assert_eq!(parse_doctor_id("abc"), Err("Doctor ID must be a number"));
        assert_eq!(parse_doctor_id("12a"), Err("Doctor ID must be a number"));
    }
}
