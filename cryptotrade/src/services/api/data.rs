//! # Table Endpoints
//!
//! Wallet, transaction and profile rows through the hosted table API.
//! Row-level security on the backend scopes every query to the session's
//! user; the `user_id` filters mirror that on the client side. Each call
//! renews an access token that is about to expire before sending.

use serde::de::DeserializeOwned;
use shared::{NewTransaction, Profile, ProfileUpdate, Transaction, Wallet};
use uuid::Uuid;

use super::client::{error_from_response, ApiClient};
use crate::core::error::{AppError, Result};

async fn read_rows<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>> {
    if !response.status().is_success() {
        return Err(error_from_response(response, false).await);
    }
    Ok(response.json::<Vec<T>>().await?)
}

fn first_row<T>(rows: Vec<T>, table: &str) -> Result<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| AppError::Api(format!("No {} row returned", table)))
}

#[tracing::instrument(skip(client))]
pub async fn list_wallets(client: &ApiClient, user_id: Uuid) -> Result<Vec<Wallet>> {
    client.ensure_fresh().await?;
    let response = client
        .authorized(client.client.get(client.rest_url("/wallets")))
        .query(&[("user_id", format!("eq.{}", user_id)), ("select", "*".to_string())])
        .send()
        .await?;

    let wallets: Vec<Wallet> = read_rows(response).await?;
    tracing::debug!(count = wallets.len(), "Fetched wallets");
    Ok(wallets)
}

#[tracing::instrument(skip(client))]
pub async fn list_transactions(client: &ApiClient, user_id: Uuid) -> Result<Vec<Transaction>> {
    client.ensure_fresh().await?;
    let response = client
        .authorized(client.client.get(client.rest_url("/transactions")))
        .query(&[
            ("user_id", format!("eq.{}", user_id)),
            ("select", "*".to_string()),
            ("order", "created_at.desc".to_string()),
        ])
        .send()
        .await?;

    let transactions: Vec<Transaction> = read_rows(response).await?;
    tracing::debug!(count = transactions.len(), "Fetched transactions");
    Ok(transactions)
}

#[tracing::instrument(
    skip(client, transaction),
    fields(kind = ?transaction.kind, amount = %transaction.amount, currency = %transaction.currency)
)]
pub async fn insert_transaction(
    client: &ApiClient,
    transaction: NewTransaction,
) -> Result<Transaction> {
    client.ensure_fresh().await?;
    let response = client
        .authorized(client.client.post(client.rest_url("/transactions")))
        .header("Prefer", "return=representation")
        .json(&transaction)
        .send()
        .await?;

    let row: Transaction = first_row(read_rows(response).await?, "transaction")?;
    tracing::info!(transaction_id = %row.id, "Transaction request stored");
    Ok(row)
}

#[tracing::instrument(skip(client))]
pub async fn get_profile(client: &ApiClient, user_id: Uuid) -> Result<Profile> {
    client.ensure_fresh().await?;
    let response = client
        .authorized(client.client.get(client.rest_url("/profiles")))
        .query(&[("id", format!("eq.{}", user_id)), ("select", "*".to_string())])
        .send()
        .await?;

    first_row(read_rows(response).await?, "profile")
}

#[tracing::instrument(skip(client, update))]
pub async fn update_profile(
    client: &ApiClient,
    user_id: Uuid,
    update: ProfileUpdate,
) -> Result<Profile> {
    client.ensure_fresh().await?;
    let response = client
        .authorized(client.client.patch(client.rest_url("/profiles")))
        .query(&[("id", format!("eq.{}", user_id))])
        .header("Prefer", "return=representation")
        .json(&update)
        .send()
        .await?;

    let profile = first_row(read_rows(response).await?, "profile")?;
    tracing::info!("Profile updated");
    Ok(profile)
}
