//! Session Gate
//!
//! A single persisted flag decides whether the catalog is shown.

use crate::config::{SESSION_KEY, SESSION_VALUE, VALID_PASSWORD, VALID_USERNAME};
use crate::error::LoginError;

/// Minimal key-value storage the session flag lives in
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// True iff the stored flag is exactly `"true"`
pub fn check_session<S: SessionStorage + ?Sized>(storage: &S) -> bool {
    storage.get(SESSION_KEY).as_deref() == Some(SESSION_VALUE)
}

/// Compare against the fixed credentials and persist the flag on success
pub fn login<S: SessionStorage + ?Sized>(storage: &S, username: &str, password: &str) -> Result<(), LoginError> {
    if username == VALID_USERNAME && password == VALID_PASSWORD {
        storage.set(SESSION_KEY, SESSION_VALUE);
        log::info!("Login succeeded");
        Ok(())
    } else {
        log::info!("Login rejected");
        Err(LoginError::InvalidCredentials)
    }
}

/// Drop the persisted flag
pub fn logout<S: SessionStorage + ?Sized>(storage: &S) {
    storage.remove(SESSION_KEY);
    log::info!("Logged out");
}

// ========================
// Backends
// ========================

/// `window.localStorage`
///
/// Storage errors (private mode, quota, missing window) are logged and
/// otherwise ignored; reads then behave as "not logged in".
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Could not write {}: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not saved", key),
        }
    }

    fn remove(&self, key: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("Could not remove {}: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not removed", key),
        }
    }
}

/// In-memory storage for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
