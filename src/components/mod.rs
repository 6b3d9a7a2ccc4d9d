//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod doctor_card;
pub mod loading;
pub mod navbar;
pub mod toast;

pub use doctor_card::DoctorCard;
pub use loading::{ListSkeleton, Loading};
pub use navbar::Navbar;
pub use toast::Toast;
