//! # Session Store
//!
//! Cached identity and profile of the signed-in user.
//!
//! Sign-in and sign-up only talk to the auth service. The identity itself
//! arrives through the auth state-change channel ([`SessionStore::subscribe`])
//! and is stored with [`SessionStore::set_identity`], so a session started,
//! restored or ended anywhere flows through one path.

use parking_lot::RwLock;
use shared::{Credentials, Identity, Profile, ProfileUpdate, SignUpResponse};
use std::sync::Arc;
use tokio::sync::watch;

use crate::core::error::{AppError, Result};
use crate::core::service::{AuthService, DataService};

#[derive(Debug, Clone)]
pub struct SessionData {
    pub identity: Option<Identity>,
    pub profile: Option<Profile>,
    /// True until the first auth state notification
    pub is_loading: bool,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            identity: None,
            profile: None,
            is_loading: true,
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    auth: Arc<dyn AuthService>,
    data: Arc<dyn DataService>,
    inner: Arc<RwLock<SessionData>>,
}

impl SessionStore {
    pub fn new(auth: Arc<dyn AuthService>, data: Arc<dyn DataService>) -> Self {
        Self {
            auth,
            data,
            inner: Arc::new(RwLock::new(SessionData::default())),
        }
    }

    pub fn snapshot(&self) -> SessionData {
        self.inner.read().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner.read().identity.clone()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.inner.read().profile.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().identity.is_some()
    }

    /// Identity of the signed-in user, or `AppError::Auth`
    pub fn require_identity(&self) -> Result<Identity> {
        self.identity().ok_or_else(AppError::not_authenticated)
    }

    /// Auth state changes from the auth service
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.auth.subscribe()
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in(&self, email: String, password: String) -> Result<()> {
        self.auth.sign_in(Credentials { email, password }).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn sign_up(&self, email: String, password: String) -> Result<SignUpResponse> {
        self.auth.sign_up(Credentials { email, password }).await
    }

    /// Sign out remotely, then drop the cached identity and profile.
    ///
    /// On failure the identity is kept.
    pub async fn sign_out(&self) -> Result<()> {
        if let Err(e) = self.auth.sign_out().await {
            tracing::error!(error = %e, "Sign-out failed");
            return Err(e);
        }

        let mut inner = self.inner.write();
        inner.identity = None;
        inner.profile = None;
        Ok(())
    }

    /// Renew the access token after the backend rejected it.
    ///
    /// When the refresh is rejected too, the auth service reports the user
    /// signed out and the identity is dropped through [`Self::set_identity`].
    pub async fn refresh_session(&self) -> Result<()> {
        self.auth.refresh_session().await.map_err(|e| {
            tracing::warn!(error = %e, "Session refresh failed");
            e
        })
    }

    /// Store the identity reported by the auth service.
    ///
    /// A different user (or none) also drops the cached profile.
    pub fn set_identity(&self, identity: Option<Identity>) {
        let mut inner = self.inner.write();
        let same_user = matches!(
            (&inner.identity, &identity),
            (Some(current), Some(next)) if current.id == next.id
        );
        if !same_user {
            inner.profile = None;
        }
        inner.identity = identity;
        inner.is_loading = false;
    }

    /// Load the profile row of the signed-in user
    pub async fn fetch_profile(&self) -> Result<Profile> {
        let identity = self.require_identity()?;
        let profile = self.data.get_profile(identity.id).await.map_err(|e| {
            tracing::error!(error = %e, "Fetch profile error");
            e
        })?;

        let mut inner = self.inner.write();
        if inner.identity.as_ref().map(|i| i.id) == Some(identity.id) {
            inner.profile = Some(profile.clone());
        }
        Ok(profile)
    }

    /// Partial update of the signed-in user's profile
    #[tracing::instrument(skip(self, update))]
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile> {
        let identity = self.require_identity()?;
        let profile = self
            .data
            .update_profile(identity.id, update)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Profile update error");
                e
            })?;

        let mut inner = self.inner.write();
        if inner.identity.as_ref().map(|i| i.id) == Some(identity.id) {
            inner.profile = Some(profile.clone());
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::FakeBackend;
    use std::sync::atomic::Ordering;

    fn store_with(backend: &Arc<FakeBackend>) -> SessionStore {
        SessionStore::new(backend.clone(), backend.clone())
    }

    #[tokio::test]
    async fn test_sign_in_does_not_set_identity_directly() {
        // Arrange
        let backend = Arc::new(FakeBackend::new());
        backend.register("ada@example.com", "secret123");
        let store = store_with(&backend);
        let mut rx = store.subscribe();

        // Act
        store
            .sign_in("ada@example.com".to_string(), "secret123".to_string())
            .await
            .unwrap();

        // Assert
        assert!(store.identity().is_none());
        assert!(rx.has_changed().unwrap());
        let reported = rx.borrow_and_update().clone();
        store.set_identity(reported);
        assert_eq!(store.identity().unwrap().email, "ada@example.com");
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_sign_in_rejected() {
        let backend = Arc::new(FakeBackend::new());
        backend.register("ada@example.com", "secret123");
        let store = store_with(&backend);

        let err = store
            .sign_in("ada@example.com".to_string(), "wrong-pass".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Auth(_)));
        assert!(store.identity().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_clears_identity_and_profile() {
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        let store = store_with(&backend);
        store.set_identity(Some(user));
        store.fetch_profile().await.unwrap();
        assert!(store.profile().is_some());

        store.sign_out().await.unwrap();

        assert!(store.identity().is_none());
        assert!(store.profile().is_none());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_sign_out_keeps_identity() {
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        backend.fail_sign_out.store(true, Ordering::SeqCst);
        let store = store_with(&backend);
        store.set_identity(Some(user.clone()));

        assert!(store.sign_out().await.is_err());
        assert_eq!(store.identity(), Some(user));
    }

    #[tokio::test]
    async fn test_update_profile_refreshes_cache() {
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        let store = store_with(&backend);
        store.set_identity(Some(user));

        let updated = store
            .update_profile(ProfileUpdate {
                full_name: Some("Ada Obi".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.full_name.as_deref(), Some("Ada Obi"));
        assert_eq!(store.profile().unwrap().full_name.as_deref(), Some("Ada Obi"));
    }

    #[tokio::test]
    async fn test_update_profile_error_is_returned() {
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        backend.fail_data.store(true, Ordering::SeqCst);
        let store = store_with(&backend);
        store.set_identity(Some(user));

        let result = store.update_profile(ProfileUpdate::default()).await;
        assert!(matches!(result, Err(AppError::Api(_))));
    }

    #[tokio::test]
    async fn test_expired_token_recovers_after_refresh() {
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        backend.token_expired.store(true, Ordering::SeqCst);
        let store = store_with(&backend);
        store.set_identity(Some(user));

        assert!(matches!(store.fetch_profile().await, Err(AppError::Auth(_))));
        store.refresh_session().await.unwrap();

        assert!(store.fetch_profile().await.is_ok());
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejected_refresh_reports_sign_out() {
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        backend.reject_refresh.store(true, Ordering::SeqCst);
        let store = store_with(&backend);
        store.set_identity(Some(user));
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        assert!(matches!(store.refresh_session().await, Err(AppError::Auth(_))));

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn test_profile_requires_identity() {
        let backend = Arc::new(FakeBackend::new());
        let store = store_with(&backend);
        assert_eq!(store.fetch_profile().await.unwrap_err(), AppError::not_authenticated());
    }

    #[test]
    fn test_switching_user_drops_profile() {
        let backend = Arc::new(FakeBackend::new());
        let store = store_with(&backend);
        let first = backend.register("a@example.com", "secret123");
        let second = backend.register("b@example.com", "secret123");

        store.set_identity(Some(first.clone()));
        store.inner.write().profile = Some(crate::services::fake::empty_profile(first.id));
        store.set_identity(Some(first));
        assert!(store.profile().is_some());

        store.set_identity(Some(second));
        assert!(store.profile().is_none());
    }
}
