//! # API Client
//!
//! Main HTTP client for the hosted backend and the price API.

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::{AuthErrorBody, Identity, Session};
use std::time::{Duration, Instant};
use tokio::sync::{watch, Mutex};

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};

/// Refresh this long before the access token runs out
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

struct ActiveSession {
    session: Session,
    expires_at: Instant,
}

/// HTTP client for the backend auth and table APIs and the price API.
///
/// Holds the active session. Every change of the signed-in identity is
/// published on a watch channel so the app learns about sign-in, sign-out
/// and expired sessions the same way.
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
    session: RwLock<Option<ActiveSession>>,
    auth_tx: watch::Sender<Option<Identity>>,
    /// Serializes token refreshes started by concurrent requests
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// The underlying client uses the configured timeout to prevent freezing.
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        let (auth_tx, _) = watch::channel(None);

        Self {
            client,
            config,
            session: RwLock::new(None),
            auth_tx,
            refresh_lock: Mutex::new(()),
        }
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.config.api_url, path)
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1{}", self.config.api_url, path)
    }

    /// Attach `apikey` and the bearer token (the session token when signed
    /// in, the anon key otherwise).
    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self
            .session
            .read()
            .as_ref()
            .map(|active| active.session.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key.clone());

        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
    }

    /// Attach `apikey` and the anon key as bearer, whatever the session
    pub(crate) fn anonymous(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    pub(crate) fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .as_ref()
            .map(|active| active.session.access_token.clone())
    }

    pub(crate) fn refresh_token(&self) -> Option<String> {
        self.session
            .read()
            .as_ref()
            .map(|active| active.session.refresh_token.clone())
            .filter(|token| !token.is_empty())
    }

    /// Replace the active session. Subscribers are notified when the
    /// identity changes; a renewed token for the same user is silent.
    pub(crate) fn set_session(&self, session: Option<Session>) {
        let identity = session.as_ref().map(|s| s.user.clone());
        *self.session.write() = session.map(|session| ActiveSession {
            expires_at: Instant::now() + Duration::from_secs(session.expires_in),
            session,
        });
        self.auth_tx.send_if_modified(|current| {
            if *current == identity {
                return false;
            }
            *current = identity;
            true
        });
    }

    #[cfg(test)]
    pub(crate) fn identity(&self) -> Option<Identity> {
        self.session.read().as_ref().map(|active| active.session.user.clone())
    }

    /// True when a session exists and its access token expires within
    /// [`REFRESH_MARGIN`] of `now`
    pub(crate) fn needs_refresh(&self, now: Instant) -> bool {
        self.session
            .read()
            .as_ref()
            .is_some_and(|active| active.expires_at <= now + REFRESH_MARGIN)
    }

    /// Renew the access token if it is about to expire
    pub(crate) async fn ensure_fresh(&self) -> Result<()> {
        if !self.needs_refresh(Instant::now()) {
            return Ok(());
        }
        let _guard = self.refresh_lock.lock().await;
        // Another request may have refreshed while we waited
        if self.needs_refresh(Instant::now()) {
            super::auth::refresh_session(self).await?;
        }
        Ok(())
    }

    pub(crate) fn subscribe_auth(&self) -> watch::Receiver<Option<Identity>> {
        self.auth_tx.subscribe()
    }
}

/// Read an error body and map it to an [`AppError`].
///
/// Credential and permission rejections from the auth API become
/// [`AppError::Auth`]; everything else is [`AppError::Api`].
pub(crate) async fn error_from_response(response: Response, auth_endpoint: bool) -> AppError {
    let status = response.status();
    let body = response.json::<AuthErrorBody>().await.unwrap_or_default();
    let message = body
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

    let auth_rejection = matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::UNPROCESSABLE_ENTITY
    );

    if (auth_endpoint && auth_rejection) || status == StatusCode::UNAUTHORIZED {
        AppError::Auth(message)
    } else {
        AppError::Api(format!("HTTP {}: {}", status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn config() -> ClientConfig {
        ClientConfig {
            api_url: "https://project.example.co".to_string(),
            anon_key: "anon".to_string(),
            price_api_url: "https://prices.example.com".to_string(),
            price_markup_pct: rust_decimal::Decimal::ONE,
            refresh_interval: Duration::from_secs(30),
            http_timeout: Duration::from_secs(10),
        }
    }

    #[test]
    fn test_urls() {
        let client = ApiClient::new(config());
        assert_eq!(
            client.auth_url("/token?grant_type=password"),
            "https://project.example.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(client.rest_url("/wallets"), "https://project.example.co/rest/v1/wallets");
    }

    #[test]
    fn test_session_changes_are_published() {
        let client = ApiClient::new(config());
        let mut rx = client.subscribe_auth();
        assert!(rx.borrow_and_update().is_none());

        let user = Identity {
            id: Uuid::new_v4(),
            email: "a@b.io".to_string(),
        };
        client.set_session(Some(Session {
            access_token: "token".to_string(),
            refresh_token: String::new(),
            expires_in: 3600,
            user: user.clone(),
        }));

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref(), Some(&user));
        assert_eq!(client.access_token().as_deref(), Some("token"));

        client.set_session(None);
        assert!(rx.borrow_and_update().is_none());
        assert!(client.identity().is_none());
    }

    fn session_for(user: &Identity, token: &str, expires_in: u64) -> Session {
        Session {
            access_token: token.to_string(),
            refresh_token: "refresh".to_string(),
            expires_in,
            user: user.clone(),
        }
    }

    #[test]
    fn test_renewed_token_for_same_user_is_silent() {
        let client = ApiClient::new(config());
        let user = Identity {
            id: Uuid::new_v4(),
            email: "a@b.io".to_string(),
        };
        client.set_session(Some(session_for(&user, "first", 3600)));
        let mut rx = client.subscribe_auth();
        rx.borrow_and_update();

        client.set_session(Some(session_for(&user, "second", 3600)));

        assert!(!rx.has_changed().unwrap());
        assert_eq!(client.access_token().as_deref(), Some("second"));
        assert_eq!(client.refresh_token().as_deref(), Some("refresh"));
    }

    #[test]
    fn test_needs_refresh_near_expiry() {
        let client = ApiClient::new(config());
        assert!(!client.needs_refresh(Instant::now()));

        let user = Identity {
            id: Uuid::new_v4(),
            email: "a@b.io".to_string(),
        };
        client.set_session(Some(session_for(&user, "token", 3600)));
        let now = Instant::now();
        assert!(!client.needs_refresh(now));
        assert!(client.needs_refresh(now + Duration::from_secs(3600 - 30)));

        client.set_session(Some(session_for(&user, "token", 0)));
        assert!(client.needs_refresh(Instant::now()));
    }
}
