//! Browser local storage.
//!
//! Storage may be missing or refuse writes (private browsing, quota). Reads
//! then come back empty and writes are dropped with a warning.

use payloads::TokenStore;
use web_sys::Storage;

pub use session::TOKEN_KEY;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    let stored = local_storage().map(|storage| storage.set_item(key, value));
    if !matches!(stored, Some(Ok(()))) {
        tracing::warn!(key, "could not write to local storage");
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// The admin bearer token, kept under [`TOKEN_KEY`].
///
/// Every instance reads the same storage slot, so the session, the request
/// interceptor and the route guard always agree on the current token.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        get_item(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        set_item(TOKEN_KEY, token);
    }

    fn clear(&self) {
        remove_item(TOKEN_KEY);
    }
}
