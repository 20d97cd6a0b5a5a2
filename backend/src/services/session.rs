//! Session store holding the single signed-in user
//!
//! The store is the only writer of the session record. Consumers read
//! immutable [`SessionSnapshot`]s, either on demand or by subscribing to the
//! watch channel. Transitions:
//!
//! ```text
//! SignedOut -> SigningIn -> SignedIn -> SigningOut -> SignedOut
//! ```
//!
//! Failures never propagate out of the store: they end up in
//! `SessionSnapshot::error` and as a destructive toast.

use std::sync::Arc;

use shared::{validate_session_user, User};
use tokio::sync::watch;

use crate::error::AppResult;
use crate::services::auth::AuthBackend;
use crate::services::notification::{NotificationService, Toast};
use crate::services::storage::LocalStorage;

pub const SIGN_IN_FAILED_MESSAGE: &str = "Failed to sign in. Please try again.";
pub const SIGN_OUT_FAILED_MESSAGE: &str = "Failed to sign out. Please try again.";

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    SignedOut,
    SigningIn,
    SignedIn,
    SigningOut,
}

/// Immutable view of the session handed to consumers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub phase: SessionPhase,
    pub error: Option<String>,
}

impl SessionSnapshot {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::SigningIn | SessionPhase::SigningOut)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Phase to settle in once a pending call resolves
    fn settled_phase(&self) -> SessionPhase {
        if self.user.is_some() {
            SessionPhase::SignedIn
        } else {
            SessionPhase::SignedOut
        }
    }
}

/// Store for the authenticated session and its persistence
pub struct SessionStore {
    auth: Arc<dyn AuthBackend>,
    storage: Arc<dyn LocalStorage>,
    notifications: NotificationService,
    storage_key: String,
    state: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    /// Create a signed-out store without touching storage
    pub fn new(
        auth: Arc<dyn AuthBackend>,
        storage: Arc<dyn LocalStorage>,
        notifications: NotificationService,
        storage_key: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            auth,
            storage,
            notifications,
            storage_key: storage_key.into(),
            state,
        }
    }

    /// Create a store and rehydrate it from storage
    pub fn restore(
        auth: Arc<dyn AuthBackend>,
        storage: Arc<dyn LocalStorage>,
        notifications: NotificationService,
        storage_key: impl Into<String>,
    ) -> Self {
        let store = Self::new(auth, storage, notifications, storage_key);
        store.rehydrate();
        store
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().is_signed_in()
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    /// Load the persisted session record.
    ///
    /// A record that does not parse or validate is removed and the session
    /// stays signed out. Unreadable storage is reset the same way.
    pub fn rehydrate(&self) -> Option<User> {
        let stored = match self.storage.get_item(&self.storage_key) {
            Ok(stored) => stored?,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read persisted session, resetting storage");
                if let Err(e) = self.storage.remove_item(&self.storage_key) {
                    tracing::warn!(error = %e, "Could not reset session storage");
                }
                return None;
            }
        };

        match Self::parse_record(&stored) {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, role = %user.role, "Restored session");
                self.state.send_modify(|s| {
                    s.user = Some(user.clone());
                    s.phase = SessionPhase::SignedIn;
                });
                Some(user)
            }
            Err(reason) => {
                tracing::warn!(%reason, "Discarding corrupted session record");
                if let Err(e) = self.storage.remove_item(&self.storage_key) {
                    tracing::warn!(error = %e, "Could not remove corrupted session record");
                }
                None
            }
        }
    }

    fn parse_record(stored: &str) -> Result<User, String> {
        let user: User = serde_json::from_str(stored).map_err(|e| e.to_string())?;
        validate_session_user(&user).map_err(str::to_string)?;
        Ok(user)
    }

    fn persist(&self, user: &User) -> AppResult<()> {
        let record = serde_json::to_string(user)?;
        self.storage.set_item(&self.storage_key, &record)
    }

    /// Sign in as the profile for `role`.
    ///
    /// Returns the new user, or `None` when the attempt failed; the failure
    /// is reported through the snapshot's `error` and a toast.
    pub async fn sign_in(&self, role: &str) -> Option<User> {
        self.state.send_modify(|s| {
            s.phase = SessionPhase::SigningIn;
            s.error = None;
        });

        let result = match self.auth.sign_in(role).await {
            Ok(user) => self.persist(&user).map(|_| user),
            Err(e) => Err(e),
        };

        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "Signed in");
                self.state.send_modify(|s| {
                    s.user = Some(user.clone());
                    s.phase = SessionPhase::SignedIn;
                });
                self.notifications.notify(Toast::new(
                    "Signed in successfully",
                    format!("Welcome back, {}!", user.name),
                ));
                Some(user)
            }
            Err(e) => {
                tracing::warn!(role, code = e.code(), error = %e, "Sign in failed");
                self.state.send_modify(|s| {
                    s.phase = s.settled_phase();
                    s.error = Some(SIGN_IN_FAILED_MESSAGE.to_string());
                });
                self.notifications
                    .notify(Toast::destructive("Sign in failed", SIGN_IN_FAILED_MESSAGE));
                None
            }
        }
    }

    /// Sign out.
    ///
    /// The session and its persisted record are cleared before the auth
    /// backend is called, so a failed call still leaves the user signed out.
    /// Returns whether the backend confirmed.
    pub async fn sign_out(&self) -> bool {
        self.state.send_modify(|s| {
            s.user = None;
            s.phase = SessionPhase::SigningOut;
        });
        if let Err(e) = self.storage.remove_item(&self.storage_key) {
            tracing::warn!(error = %e, "Could not remove persisted session");
        }

        let confirmed = match self.auth.sign_out().await {
            Ok(()) => {
                tracing::info!("Signed out");
                self.notifications.notify(Toast::new(
                    "Signed out",
                    "You have been signed out successfully.",
                ));
                true
            }
            Err(e) => {
                tracing::warn!(code = e.code(), error = %e, "Sign out failed");
                self.notifications
                    .notify(Toast::destructive("Sign out failed", SIGN_OUT_FAILED_MESSAGE));
                false
            }
        };

        self.state.send_modify(|s| s.phase = s.settled_phase());
        confirmed
    }
}
