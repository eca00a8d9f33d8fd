//! Auth token storage and request headers
//!
//! Only the client side of authentication lives here: remembering the
//! bearer token the backend handed out and turning it into request
//! headers. Talking to the backend is the caller's job.

use promptdeck_common::Result;
use std::collections::HashMap;
use tracing::debug;

/// Key the token is stored under
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Key/value store that persists the session token
pub trait TokenStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a value, returning whether it existed
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// In-memory token store
///
/// Values are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: HashMap<String, String>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }
}

/// Client session backed by a [`TokenStore`]
#[derive(Debug, Default)]
pub struct AuthSession<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> AuthSession<S> {
    /// Wrap a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current token, if any
    pub fn token(&self) -> Result<Option<String>> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    /// Remember a token issued by the backend
    pub fn login(&mut self, token: &str) -> Result<()> {
        debug!("Storing auth token");
        self.store.set(AUTH_TOKEN_KEY, token)
    }

    /// Forget the token
    pub fn logout(&mut self) -> Result<()> {
        if self.store.remove(AUTH_TOKEN_KEY)? {
            debug!("Removed auth token");
        }
        Ok(())
    }

    /// True when any token is stored, even an empty one
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.token()?.is_some())
    }

    /// `Authorization` header for authenticated requests, empty when logged out
    pub fn auth_headers(&self) -> Result<HashMap<String, String>> {
        let mut headers = HashMap::new();
        if let Some(token) = self.token()?.filter(|token| !token.is_empty()) {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        Ok(headers)
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
