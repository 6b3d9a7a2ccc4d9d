//! State Management
//!
//! The persisted login session and the transient notification signals.

pub mod session;

pub use session::{provide_session_state, SessionState, SessionStore, SessionUser, StoragePort};
