//! Bearer-token session shared by every page and component.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in two places: a `localStorage` record for client-side
//! reads and a `token` cookie so the host can see the session on the next
//! page navigation. `Session` is the only code allowed to touch either store.
//!
//! TRADE-OFFS
//! ==========
//! Both stores share one 24h lifetime. The local record carries its own
//! `expires_at_ms`; an expired record is purged from both stores on read, and
//! a store that went missing is re-synced from the other.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Local-storage key holding the JSON token record.
pub const TOKEN_KEY: &str = "token";
/// Cookie carrying the raw token.
pub const TOKEN_COOKIE: &str = "token";
/// Lifetime shared by the cookie and the local record.
pub const TOKEN_TTL_SECS: u64 = 86_400;

/// Synchronous string key/value storage (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Cookie access (`document.cookie` in the browser).
pub trait CookieStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str, max_age_secs: u64);
    fn expire(&self, name: &str);
}

/// The persisted local-storage record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    pub expires_at_ms: u64,
}

/// Single access point for the auth token.
#[derive(Clone, Debug)]
pub struct Session<K, C> {
    local: K,
    cookies: C,
}

impl<K: KeyValueStore, C: CookieStore> Session<K, C> {
    pub fn new(local: K, cookies: C) -> Self {
        Self { local, cookies }
    }

    /// Persist `token` to both stores.
    pub fn save(&self, token: &str) {
        self.save_at(token, now_ms());
    }

    /// Current token, or `None` when signed out or expired.
    pub fn read(&self) -> Option<String> {
        self.read_at(now_ms())
    }

    /// Remove the token from both stores.
    pub fn clear(&self) {
        self.local.remove(TOKEN_KEY);
        self.cookies.expire(TOKEN_COOKIE);
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    pub fn save_at(&self, token: &str, now_ms: u64) {
        let record = StoredToken { token: token.to_owned(), expires_at_ms: now_ms + TOKEN_TTL_SECS * 1000 };
        if let Ok(raw) = serde_json::to_string(&record) {
            self.local.set(TOKEN_KEY, &raw);
        }
        self.cookies.set(TOKEN_COOKIE, token, TOKEN_TTL_SECS);
    }

    pub fn read_at(&self, now_ms: u64) -> Option<String> {
        let record = self
            .local
            .get(TOKEN_KEY)
            .and_then(|raw| serde_json::from_str::<StoredToken>(&raw).ok())
            .filter(|r| !r.token.is_empty());

        match record {
            Some(record) if record.expires_at_ms > now_ms => {
                if self.cookies.get(TOKEN_COOKIE).as_deref() != Some(record.token.as_str()) {
                    let remaining_secs = (record.expires_at_ms - now_ms).div_ceil(1000);
                    self.cookies.set(TOKEN_COOKIE, &record.token, remaining_secs);
                }
                Some(record.token)
            }
            Some(_) => {
                self.clear();
                None
            }
            None => {
                // Unreadable local entries are dropped; a live cookie is adopted.
                self.local.remove(TOKEN_KEY);
                let token = self.cookies.get(TOKEN_COOKIE).filter(|t| !t.is_empty())?;
                self.save_at(&token, now_ms);
                Some(token)
            }
        }
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn set_cookie_string(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; path=/; max-age={max_age_secs}")
}

#[cfg(any(test, feature = "hydrate"))]
fn expired_cookie_string(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/")
}

/// Extract `name` from a `document.cookie` style header.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

// =============================================================================
// BROWSER BACKENDS
// =============================================================================

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// `document.cookie`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

#[cfg(feature = "hydrate")]
impl DocumentCookies {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }
}

#[cfg(feature = "hydrate")]
impl CookieStore for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        cookie_value(&header, name)
    }

    fn set(&self, name: &str, value: &str, max_age_secs: u64) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&set_cookie_string(name, value, max_age_secs));
        }
    }

    fn expire(&self, name: &str) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&expired_cookie_string(name));
        }
    }
}

#[cfg(feature = "hydrate")]
pub type BrowserSession = Session<LocalStorage, DocumentCookies>;

/// The session backed by real browser storage.
#[cfg(feature = "hydrate")]
pub fn browser_session() -> BrowserSession {
    Session::new(LocalStorage, DocumentCookies)
}
