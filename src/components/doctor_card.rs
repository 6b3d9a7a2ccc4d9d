//! Doctor Card Component

use leptos::*;
use leptos_router::*;

use crate::api::Doctor;

/// Card for one doctor in the directory, linking to its open slots.
#[component]
pub fn DoctorCard(doctor: Doctor) -> impl IntoView {
    let slots_href = format!("/doctors/{}/slots", doctor.id);

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors h-full">
            <h3 class="font-semibold text-lg">{doctor.full_name}</h3>
            <p class="text-gray-400 text-sm mt-1">"ID: "{doctor.id}</p>

            <A
                href=slots_href
                class="inline-block mt-4 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "See available dates"
            </A>
        </div>
    }
}
