//! The user document store.
//!
//! Users are stored one row per phone number, with the interaction
//! lists and the remaining profile fields serialized as JSON columns.
//! The [`UserStore`] trait has a SQLite-backed implementation for the
//! CLI and an in-memory one for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use catalog::{Product, User};

use crate::DbPool;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result of replacing a user's stored recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The stored list was replaced with a different value.
    Updated,
    /// The stored list already equaled the new value.
    Unchanged,
    /// No document exists for that phone number.
    Missing,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError>;

    /// Replace the stored recommendation list wholesale.
    async fn save_recommendations(
        &self,
        phone: &str,
        recommendations: &[Product],
    ) -> Result<SaveOutcome, StoreError>;

    /// Insert or replace a full user document.
    async fn upsert_user(&self, user: &User) -> Result<(), StoreError>;
}

pub struct SqlUserStore {
    pool: DbPool,
}

impl SqlUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            "SELECT phone, viewed_items, cart, wishlist, recommendations, profile
             FROM users
             WHERE phone = ?",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        row.map(user_from_row).transpose()
    }

    async fn save_recommendations(
        &self,
        phone: &str,
        recommendations: &[Product],
    ) -> Result<SaveOutcome, StoreError> {
        let row = sqlx::query("SELECT recommendations FROM users WHERE phone = ?")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(SaveOutcome::Missing);
        };

        let stored_raw: String = row.try_get("recommendations")?;
        let stored: Value = serde_json::from_str(&stored_raw).unwrap_or(Value::Null);
        let fresh = serde_json::to_value(recommendations)
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        if stored == fresh {
            debug!("recommendations for {phone} unchanged");
            return Ok(SaveOutcome::Unchanged);
        }

        sqlx::query("UPDATE users SET recommendations = ? WHERE phone = ?")
            .bind(encode_json(&fresh)?)
            .bind(phone)
            .execute(&self.pool)
            .await?;

        debug!("replaced recommendations for {phone}");
        Ok(SaveOutcome::Updated)
    }

    async fn upsert_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (phone, viewed_items, cart, wishlist, recommendations, profile)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(phone) DO UPDATE SET
                viewed_items = excluded.viewed_items,
                cart = excluded.cart,
                wishlist = excluded.wishlist,
                recommendations = excluded.recommendations,
                profile = excluded.profile",
        )
        .bind(&user.phone)
        .bind(encode_products(&user.viewed_items)?)
        .bind(encode_products(&user.cart)?)
        .bind(encode_products(&user.wishlist)?)
        .bind(encode_products(&user.recommendations)?)
        .bind(encode_json(&Value::Object(user.extra.clone()))?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn user_from_row(row: SqliteRow) -> Result<User, StoreError> {
    let phone: String = row.try_get("phone")?;

    let viewed_items = decode_products(&row, "viewed_items")?;
    let cart = decode_products(&row, "cart")?;
    let wishlist = decode_products(&row, "wishlist")?;
    let recommendations = decode_products(&row, "recommendations")?;

    let profile_raw: String = row.try_get("profile")?;
    let extra: Map<String, Value> = serde_json::from_str(&profile_raw)
        .map_err(|e| StoreError::Decode(format!("profile for {phone}: {e}")))?;

    Ok(User {
        phone,
        viewed_items,
        cart,
        wishlist,
        recommendations,
        extra,
    })
}

fn decode_products(row: &SqliteRow, column: &str) -> Result<Vec<Product>, StoreError> {
    let raw: String = row.try_get(column)?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Decode(format!("{column}: {e}")))
}

fn encode_products(products: &[Product]) -> Result<String, StoreError> {
    serde_json::to_string(products).map_err(|e| StoreError::Decode(e.to_string()))
}

fn encode_json(value: &Value) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|e| StoreError::Decode(e.to_string()))
}

/// In-memory twin of [`SqlUserStore`] for tests.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(phone).cloned())
    }

    async fn save_recommendations(
        &self,
        phone: &str,
        recommendations: &[Product],
    ) -> Result<SaveOutcome, StoreError> {
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(phone) else {
            return Ok(SaveOutcome::Missing);
        };

        if user.recommendations == recommendations {
            return Ok(SaveOutcome::Unchanged);
        }

        user.recommendations = recommendations.to_vec();
        Ok(SaveOutcome::Updated)
    }

    async fn upsert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        users.insert(user.phone.clone(), user.clone());
        Ok(())
    }
}
