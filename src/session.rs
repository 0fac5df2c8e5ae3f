//! Guest / signed-in session state with persistence and an explicit
//! observer channel.

use std::sync::{Arc, RwLock};

use log::{error, info};
use tokio::sync::watch;

use crate::models::UserProfile;
use crate::store::KeyValueStore;

const SESSION_KEY: &str = "user_session";

/// The signed-in (or guest) user, restored from the key-value store at
/// construction and persisted on every change.
///
/// Components that render the profile subscribe through [`Self::subscribe`]
/// and receive every new profile value; there is no broadcast bus, the
/// session itself is the subject.
pub struct UserSession {
    store: Arc<dyn KeyValueStore>,
    profile: RwLock<UserProfile>,
    publisher: watch::Sender<UserProfile>,
}

impl UserSession {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let profile = store
            .get(SESSION_KEY)
            .and_then(|bytes| serde_json::from_slice::<UserProfile>(&bytes).ok())
            .filter(|profile| profile.logged_in)
            .unwrap_or_else(UserProfile::guest);

        let (publisher, _) = watch::channel(profile.clone());

        Self {
            store,
            profile: RwLock::new(profile),
            publisher,
        }
    }

    pub fn profile(&self) -> UserProfile {
        self.profile.read().unwrap().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.profile.read().unwrap().logged_in
    }

    /// The identity used to scope per-user storage keys. Falls back to the
    /// guest identity while signed out.
    pub fn user_id(&self) -> String {
        self.profile.read().unwrap().email().to_string()
    }

    pub fn sign_in(&self, email: String, name: Option<String>, avatar_url: Option<String>) {
        info!("Signing in {email}");
        self.apply(UserProfile {
            logged_in: true,
            email: Some(email),
            name,
            avatar_url,
        });
    }

    pub fn sign_out(&self) {
        info!("Signing out, back to guest");
        self.apply(UserProfile::guest());
    }

    /// Receiver that observes every profile change, starting from the
    /// current value.
    pub fn subscribe(&self) -> watch::Receiver<UserProfile> {
        self.publisher.subscribe()
    }

    fn apply(&self, profile: UserProfile) {
        match serde_json::to_vec(&profile) {
            Ok(bytes) => self.store.set(SESSION_KEY, &bytes),
            Err(err) => error!("Failed to encode session state: {err}"),
        }

        *self.profile.write().unwrap() = profile.clone();
        self.publisher.send_replace(profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GUEST_EMAIL, GUEST_NAME};
    use crate::store::MemoryStore;

    #[test]
    fn starts_as_guest_with_fallback_identity() {
        let session = UserSession::new(Arc::new(MemoryStore::new()));
        assert!(!session.is_logged_in());
        assert_eq!(session.user_id(), GUEST_EMAIL);
        assert_eq!(session.profile().display_name(), GUEST_NAME);
    }

    #[test]
    fn sign_in_round_trips_through_the_store() {
        let store = Arc::new(MemoryStore::new());

        {
            let session = UserSession::new(store.clone());
            session.sign_in(
                "ana@example.com".to_string(),
                Some("Ana".to_string()),
                None,
            );
        }

        let restored = UserSession::new(store);
        assert!(restored.is_logged_in());
        assert_eq!(restored.user_id(), "ana@example.com");
        assert_eq!(restored.profile().display_name(), "Ana");
    }

    #[test]
    fn sign_out_reverts_to_guest_and_clears_persisted_login() {
        let store = Arc::new(MemoryStore::new());

        {
            let session = UserSession::new(store.clone());
            session.sign_in("ana@example.com".to_string(), None, None);
            session.sign_out();
        }

        let restored = UserSession::new(store);
        assert!(!restored.is_logged_in());
        assert_eq!(restored.user_id(), GUEST_EMAIL);
    }

    #[test]
    fn subscribers_observe_every_change() {
        let session = UserSession::new(Arc::new(MemoryStore::new()));
        let mut observer = session.subscribe();

        assert!(!observer.borrow().logged_in);

        session.sign_in("ana@example.com".to_string(), None, None);
        assert!(observer.has_changed().unwrap());
        assert_eq!(
            observer.borrow_and_update().email.as_deref(),
            Some("ana@example.com")
        );

        session.sign_out();
        assert!(observer.has_changed().unwrap());
        assert!(!observer.borrow_and_update().logged_in);
    }

    #[test]
    fn corrupt_session_state_reads_as_guest() {
        let store = Arc::new(MemoryStore::new());
        store.set(SESSION_KEY, b"{broken");

        let session = UserSession::new(store);
        assert!(!session.is_logged_in());
        assert_eq!(session.user_id(), GUEST_EMAIL);
    }
}
