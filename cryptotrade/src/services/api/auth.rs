//! # Authentication Endpoints
//!
//! Password sign-in, sign-up, token refresh and sign-out against the hosted
//! auth API.

use shared::{Credentials, RefreshRequest, Session, SignUpResponse};

use super::client::{error_from_response, ApiClient};
use crate::core::error::{AppError, Result};

/// Sign in with email and password.
///
/// On success the session becomes active and subscribers are notified.
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn sign_in(client: &ApiClient, credentials: Credentials) -> Result<Session> {
    tracing::info!("Attempting sign-in");
    let start = std::time::Instant::now();

    let response = client
        .authorized(client.client.post(client.auth_url("/token?grant_type=password")))
        .json(&credentials)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Sign-in network error");
            AppError::from(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        let err = error_from_response(response, true).await;
        tracing::warn!(
            status = status.as_u16(),
            error = %err,
            duration_ms = start.elapsed().as_millis(),
            "Sign-in failed"
        );
        return Err(err);
    }

    let session = response.json::<Session>().await.map_err(|e| {
        tracing::error!(error = %e, "Sign-in response parse error");
        AppError::from(e)
    })?;

    tracing::info!(
        user_id = %session.user.id,
        duration_ms = start.elapsed().as_millis(),
        "Sign-in successful"
    );
    client.set_session(Some(session.clone()));
    Ok(session)
}

/// Register a new account.
///
/// When the backend requires email confirmation no session is returned and
/// the user stays signed out.
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn sign_up(client: &ApiClient, credentials: Credentials) -> Result<SignUpResponse> {
    let response = client
        .authorized(client.client.post(client.auth_url("/signup")))
        .json(&credentials)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let err = error_from_response(response, true).await;
        tracing::warn!(status = status.as_u16(), error = %err, "Sign-up failed");
        return Err(err);
    }

    let result = response.json::<SignUpResponse>().await?;
    match &result {
        SignUpResponse::Session(session) => {
            tracing::info!(user_id = %session.user.id, "Sign-up successful, session started");
            client.set_session(Some(session.clone()));
        }
        SignUpResponse::PendingConfirmation(user) => {
            tracing::info!(user_id = %user.id, "Sign-up successful, awaiting email confirmation");
        }
    }
    Ok(result)
}

/// Exchange the refresh token for a new access token.
///
/// A rejected refresh token ends the local session, so subscribers see the
/// user signed out. Network errors keep the session for a later attempt.
#[tracing::instrument(skip(client))]
pub async fn refresh_session(client: &ApiClient) -> Result<()> {
    let Some(refresh_token) = client.refresh_token() else {
        tracing::warn!("No refresh token, ending session");
        client.set_session(None);
        return Err(AppError::Auth("Session expired".to_string()));
    };

    let response = client
        .anonymous(client.client.post(client.auth_url("/token?grant_type=refresh_token")))
        .json(&RefreshRequest { refresh_token })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let err = error_from_response(response, true).await;
        if matches!(err, AppError::Auth(_)) {
            tracing::warn!(status = status.as_u16(), error = %err, "Refresh rejected, ending session");
            client.set_session(None);
        } else {
            tracing::warn!(status = status.as_u16(), error = %err, "Token refresh failed");
        }
        return Err(err);
    }

    let session = response.json::<Session>().await?;
    tracing::debug!(expires_in = session.expires_in, "Access token refreshed");
    client.set_session(Some(session));
    Ok(())
}

/// End the active session.
///
/// The local session is only dropped when the backend accepts the logout.
#[tracing::instrument(skip(client))]
pub async fn sign_out(client: &ApiClient) -> Result<()> {
    if client.access_token().is_none() {
        client.set_session(None);
        return Ok(());
    }

    let response = client
        .authorized(client.client.post(client.auth_url("/logout")))
        .send()
        .await?;

    let status = response.status();
    // An already expired token has nothing left to revoke
    if status.is_success() || status == reqwest::StatusCode::UNAUTHORIZED {
        tracing::info!("Signed out");
        client.set_session(None);
        return Ok(());
    }

    let err = error_from_response(response, true).await;
    tracing::warn!(status = status.as_u16(), error = %err, "Sign-out failed");
    Err(err)
}
