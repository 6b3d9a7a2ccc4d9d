//! Pages
//!
//! Top-level page components for each route.

pub mod doctors;
pub mod login;
pub mod register;
pub mod slots;
pub mod subscriptions;

pub use doctors::Doctors;
pub use login::Login;
pub use register::Register;
pub use slots::DoctorSlots;
pub use subscriptions::Subscriptions;
