//! Login Session
//!
//! An explicit session store with `login`/`logout` operations over an
//! injectable persistence port, plus the reactive wrapper provided to the
//! component tree.

use leptos::*;

const USER_KEY: &str = "termin_user";
const TOKEN_KEY: &str = "termin_token";

/// The logged-in user as persisted between page loads.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}

/// Key-value persistence behind the session store. The browser
/// implementation sits on local storage; tests inject an in-memory one.
pub trait StoragePort {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// `StoragePort` over the browser's local storage. Every operation degrades
/// to a no-op when storage is unavailable.
#[derive(Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl StoragePort for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn clear(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The session record: a serialized user plus the bearer token, written on
/// login, cleared on logout, read once at startup.
#[derive(Clone)]
pub struct SessionStore<P: StoragePort> {
    port: P,
}

impl<P: StoragePort> SessionStore<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// The persisted user, if any. A record that no longer decodes counts
    /// as logged out.
    pub fn load(&self) -> Option<SessionUser> {
        self.port
            .read(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.port.read(TOKEN_KEY)
    }

    pub fn login(&self, user: &SessionUser, token: &str) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.port.write(USER_KEY, &raw);
        }
        self.port.write(TOKEN_KEY, token);
    }

    pub fn logout(&self) {
        self.port.clear(USER_KEY);
        self.port.clear(TOKEN_KEY);
    }
}

/// Session state provided to all components: the reactive user plus the
/// transient success/error messages shown as toasts.
#[derive(Clone)]
pub struct SessionState {
    pub user: RwSignal<Option<SessionUser>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide the session state to the component tree, restoring any
/// persisted login.
pub fn provide_session_state() {
    let store = SessionStore::new(BrowserStorage);
    let state = SessionState {
        user: create_rw_signal(store.load()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl SessionState {
    fn store() -> SessionStore<BrowserStorage> {
        SessionStore::new(BrowserStorage)
    }

    /// Persist the session and set the reactive user.
    pub fn login(&self, user: SessionUser, token: &str) {
        Self::store().login(&user, token);
        self.user.set(Some(user));
    }

    /// Clear the persisted session and the reactive user.
    pub fn logout(&self) {
        Self::store().logout();
        self.user.set(None);
    }

    /// The bearer token for authenticated requests.
    pub fn auth_token(&self) -> Option<String> {
        Self::store().token()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
    }

    impl StoragePort for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn clear(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn john() -> SessionUser {
        SessionUser { id: 1, username: "john".to_string() }
    }

    #[test]
    fn test_login_persists_user_and_token() {
        let store = SessionStore::new(MemoryStorage::default());
        assert!(store.load().is_none());
        assert!(store.token().is_none());

        store.login(&john(), "fake-token");
        assert_eq!(store.load(), Some(john()));
        assert_eq!(store.token().as_deref(), Some("fake-token"));
    }

    #[test]
    fn test_logout_clears_the_record() {
        let store = SessionStore::new(MemoryStorage::default());
        store.login(&john(), "fake-token");

        store.logout();
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_corrupt_record_loads_as_logged_out() {
        let storage = MemoryStorage::default();
        storage.write(USER_KEY, "{not json");
        let store = SessionStore::new(storage);
        assert!(store.load().is_none());
    }
}
