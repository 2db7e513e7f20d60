//! Session holder
//!
//! Bearer token plus the cached user profile. Token presence is what gates
//! authenticated operations; the profile may still be loading while the
//! session already counts as logged in.

use shared::User;
use tokio::sync::watch;

/// Session state
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Single-writer session container
///
/// Persisting the token across restarts is the host app's job; a restored
/// token comes back in through [`crate::ClientConfig`].
#[derive(Debug)]
pub struct SessionStore {
    state: watch::Sender<Session>,
}

impl SessionStore {
    pub fn new(token: Option<String>) -> Self {
        let (state, _) = watch::channel(Session { token, user: None });
        Self { state }
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Store the token of a fresh login. The cached profile is dropped:
    /// it belongs to the previous account until proven otherwise.
    pub(crate) fn set_token(&self, token: String) {
        self.state.send_modify(|session| {
            session.token = Some(token);
            session.user = None;
        });
    }

    pub(crate) fn set_user(&self, user: User) {
        self.state.send_modify(|session| session.user = Some(user));
    }

    /// Logout: token and profile are cleared together, synchronously
    pub(crate) fn clear(&self) {
        self.state.send_modify(|session| *session = Session::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            username: Some("mario".into()),
            phone_number: None,
            email: "mario@example.com".into(),
        }
    }

    #[test]
    fn starts_logged_out_without_token() {
        let store = SessionStore::new(None);
        assert!(!store.is_authenticated());
        assert!(store.snapshot().user().is_none());
    }

    #[test]
    fn restored_token_counts_as_logged_in() {
        let store = SessionStore::new(Some("tok".into()));
        assert!(store.is_authenticated());
    }

    #[test]
    fn login_sets_token_before_profile_arrives() {
        let store = SessionStore::new(None);

        store.set_token("tok".into());
        assert!(store.is_authenticated());
        assert!(store.snapshot().user().is_none());

        store.set_user(user());
        assert_eq!(store.snapshot().user().unwrap().id, 1);
    }

    #[test]
    fn fresh_login_drops_stale_profile() {
        let store = SessionStore::new(None);
        store.set_token("tok-a".into());
        store.set_user(user());

        store.set_token("tok-b".into());
        assert!(store.snapshot().user().is_none());
    }

    #[test]
    fn logout_clears_everything_at_once() {
        let store = SessionStore::new(None);
        store.set_token("tok".into());
        store.set_user(user());

        store.clear();

        let session = store.snapshot();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }
}
