use std::sync::{Arc, Mutex};

/// Durable client-side home of the bearer token.
///
/// In the browser this is local storage; natively it is usually a
/// [`MemoryTokenStore`].
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str);

    fn clear(&self);

    /// Clear the token only if it still equals `expected`. Returns whether a
    /// token was removed.
    fn clear_if(&self, expected: &str) -> bool {
        if self.get().as_deref() == Some(expected) {
            self.clear();
            true
        } else {
            false
        }
    }
}

/// A token store held in memory. Clones share the same slot.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }

    fn clear_if(&self, expected: &str) -> bool {
        // single lock so the comparison and the removal cannot interleave
        match self.token.lock() {
            Ok(mut slot) if slot.as_deref() == Some(expected) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_if_only_removes_matching_token() {
        let store = MemoryTokenStore::with_token("old");
        assert!(!store.clear_if("other"));
        assert_eq!(store.get().as_deref(), Some("old"));

        store.set("new");
        assert!(!store.clear_if("old"));
        assert_eq!(store.get().as_deref(), Some("new"));

        assert!(store.clear_if("new"));
        assert_eq!(store.get(), None);
        assert!(!store.clear_if("new"));
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        other.set("T");
        assert_eq!(store.get().as_deref(), Some("T"));
        store.clear();
        assert_eq!(other.get(), None);
    }
}
