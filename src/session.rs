//! Session gate: the single admin login for the running process.
//!
//! The gate owns its `LocalStorage` handle and mirrors every successful
//! login/logout into the `user` record so the next start can restore it.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{FolioError, LocalStorage, Result};

/// Storage key of the persisted session record.
pub const SESSION_KEY: &str = "user";

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "password";

/// Authenticated user, serialized as `{ "id", "username" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Shown as the display name
    pub username: String,
}

impl User {
    fn admin() -> Self {
        User {
            id: "1".to_string(),
            username: "Sudesh Patil".to_string(),
        }
    }
}

/// Authentication state of the process.
#[derive(Debug)]
pub struct SessionGate {
    user: Option<User>,
    storage: LocalStorage,
}

impl SessionGate {
    /// Creates an anonymous gate. Call [`SessionGate::restore_session`] to pick
    /// up a persisted login.
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            user: None,
            storage,
        }
    }

    /// Reads the persisted record once at startup.
    ///
    /// A missing or unreadable record leaves the gate anonymous.
    pub fn restore_session(&mut self) {
        match self.storage.get_item::<User>(SESSION_KEY) {
            Ok(Some(user)) => {
                info!("Restored session for {}", user.username);
                self.user = Some(user);
            }
            Ok(None) => debug!("No persisted session"),
            Err(e) => {
                warn!("Ignoring unreadable session record: {}", e);
                self.user = None;
            }
        }
    }

    /// Attempts a login. Returns `Ok(false)` on a credential mismatch, in which
    /// case neither memory nor storage is touched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            info!("Rejected login attempt for {}", username);
            return Ok(false);
        }

        let user = User::admin();
        self.storage.set_item(SESSION_KEY, &user)?;
        info!("Logged in as {}", user.username);
        self.user = Some(user);
        Ok(true)
    }

    /// Clears the session and removes the persisted record.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.username);
        }
        self.storage.remove_item(SESSION_KEY)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Guard for protected views.
    pub fn require_authenticated(&self, route: &str) -> Result<&User> {
        self.user.as_ref().ok_or_else(|| FolioError::Unauthorized {
            route: route.to_string(),
        })
    }
}
