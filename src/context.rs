//! Application Context
//!
//! Session state provided via Leptos Context API.

use leptos::prelude::*;

use crate::error::LoginError;
use crate::session::{self, BrowserStorage, SessionStorage};

/// Session signals shared with the login form and the catalog view
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the catalog may be shown - read
    pub authenticated: ReadSignal<bool>,
    /// Whether the catalog may be shown - write
    set_authenticated: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(authenticated: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            authenticated: authenticated.0,
            set_authenticated: authenticated.1,
        }
    }

    /// Check credentials, persist the flag and flip the gate
    pub fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        self.login_with(&BrowserStorage, username, password)
    }

    /// Clear the persisted flag and close the gate. Loaded data stays put.
    pub fn logout(&self) {
        self.logout_with(&BrowserStorage);
    }

    fn login_with<S: SessionStorage + ?Sized>(&self, storage: &S, username: &str, password: &str) -> Result<(), LoginError> {
        session::login(storage, username, password)?;
        self.set_authenticated.set(true);
        Ok(())
    }

    fn logout_with<S: SessionStorage + ?Sized>(&self, storage: &S) {
        session::logout(storage);
        self.set_authenticated.set(false);
    }
}
