//! HTTP API Access
//!
//! Repository functions and error types for the Moj Termin REST API.

pub mod client;
pub mod error;

pub use client::*;
pub use error::ApiError;
