//! Fetch State Primitives
//!
//! The one shape every data-backed view repeats: default-empty data plus a
//! loading flag, and a token guard against stale responses.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

/// Three-valued view state for a fetched value: `data` (default-empty),
/// `loading`, and an implicit error surfaced as a transient message rather
/// than retained here.
pub struct FetchState<T: 'static> {
    pub data: RwSignal<T>,
    pub loading: RwSignal<bool>,
}

// Signal handles copy regardless of T, so the derive bounds are too strict
impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FetchState<T> {}

impl<T: Default> FetchState<T> {
    /// Fresh state: empty data, loading until the first response lands.
    pub fn new() -> Self {
        Self {
            data: create_rw_signal(T::default()),
            loading: create_rw_signal(true),
        }
    }

    /// Mark a refetch in flight. Previous data stays visible.
    pub fn begin(&self) {
        self.loading.set(true);
    }

    /// Apply a successful response.
    pub fn resolve(&self, value: T) {
        self.data.set(value);
        self.loading.set(false);
    }

    /// A request failed: stop loading, keep whatever data we had.
    pub fn fail(&self) {
        self.loading.set(false);
    }
}

/// Monotonically increasing request token issuer.
///
/// Issue a token before each fetch and apply the response only while that
/// token is still the newest one, so a late reply for an old route
/// parameter cannot overwrite fresher data. There is no cancellation; the
/// stale response is simply dropped.
#[derive(Clone, Default)]
pub struct RequestToken {
    latest: Rc<Cell<u64>>,
}

impl RequestToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next token, invalidating all previously issued ones.
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    /// Whether `token` is still the newest one issued.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_transitions() {
        let runtime = create_runtime();

        let state = FetchState::<Vec<u32>>::new();
        assert!(state.loading.get_untracked());
        assert!(state.data.get_untracked().is_empty());

        state.resolve(vec![1, 2]);
        assert!(!state.loading.get_untracked());
        assert_eq!(state.data.get_untracked(), vec![1, 2]);

        // A failed refetch keeps the previous data
        state.begin();
        assert!(state.loading.get_untracked());
        state.fail();
        assert!(!state.loading.get_untracked());
        assert_eq!(state.data.get_untracked(), vec![1, 2]);

        runtime.dispose();
    }

    #[test]
    fn test_request_token_invalidates_older_tokens() {
        let guard = RequestToken::new();

        let first = guard.issue();
        assert!(guard.is_current(first));

        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_request_token_clones_share_the_counter() {
        let guard = RequestToken::new();
        let held = guard.clone();

        let token = held.issue();
        assert!(guard.is_current(token));
        guard.issue();
        assert!(!held.is_current(token));
    }
}
