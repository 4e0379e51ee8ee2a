use std::fmt;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use shared::models::User;

/// Local-storage key the serialized member session lives under.
const SESSION_KEY: &str = "storefront.user";

/// Read side of the ambient member session.
///
/// The navigation layer receives this as an injected dependency instead of
/// reaching into a global service, so tests can supply a deterministic
/// store.
pub trait SessionStore {
    /// The member currently signed in, if any.
    fn current_user(&self) -> Option<User>;

    /// Drop the local session.
    fn clear(&self);
}

/// Browser-backed session store reading the serialized member from local
/// storage.
#[derive(Debug, Default)]
pub struct BrowserSessions;

impl SessionStore for BrowserSessions {
    fn current_user(&self) -> Option<User> {
        LocalStorage::get(SESSION_KEY).ok()
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_KEY);
    }
}

/// Cloneable handle carrying the injected session store through component
/// context. Equality is handle identity, which is what context consumers
/// need to avoid spurious re-renders.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    /// Wrap a session store for injection.
    #[must_use]
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self(store)
    }

    /// The member currently signed in, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.0.current_user()
    }

    /// Drop the local session.
    pub fn clear(&self) {
        self.0.clear();
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionHandle")
    }
}

/// In-memory session store injected by tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemorySessions {
    user: std::cell::RefCell<Option<User>>,
}

#[cfg(test)]
impl MemorySessions {
    /// Store with `user` already signed in.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self {
            user: std::cell::RefCell::new(Some(user)),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemorySessions {
    fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn clear(&self) {
        self.user.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Timestamp;
    use uuid::Uuid;

    fn member() -> User {
        User {
            id: Uuid::new_v4(),
            username: "mei".to_string(),
            email: "mei@example.com".to_string(),
            display_name: Some("Mei-Ling".to_string()),
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn memory_store_mirrors_and_clears() {
        let store = MemorySessions::signed_in(member());
        assert_eq!(store.current_user().unwrap().username, "mei");

        store.clear();
        assert!(store.current_user().is_none());

        // Clearing an empty store is a no-op
        store.clear();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn empty_store_reads_none() {
        let store = MemorySessions::default();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn handle_equality_is_identity() {
        let a = SessionHandle::new(Rc::new(MemorySessions::default()));
        let b = a.clone();
        let c = SessionHandle::new(Rc::new(MemorySessions::default()));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn handle_delegates_to_store() {
        let handle = SessionHandle::new(Rc::new(MemorySessions::signed_in(member())));
        assert_eq!(
            handle.current_user().unwrap().greeting_name(),
            "Mei-Ling"
        );

        handle.clear();
        assert!(handle.current_user().is_none());
    }
}
