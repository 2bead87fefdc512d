use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::error::StoreError;
use crate::models::UserRecord;

/// Access to the application's user accounts: lookup by email and save.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All accounts whose email equals `email`, in id order. Emails are not unique.
    async fn find_by_email(&self, email: &str) -> Result<Vec<UserRecord>, StoreError>;

    /// Persist the flags and credential of `user`.
    async fn save(&self, user: &UserRecord) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn find_by_email(&self, email: &str) -> Result<Vec<UserRecord>, StoreError> {
        (**self).find_by_email(email).await
    }

    async fn save(&self, user: &UserRecord) -> Result<(), StoreError> {
        (**self).save(user).await
    }
}

/// `UserStore` over the web application's `auth_user` table.
#[derive(Clone)]
pub struct PgUserStore {
    pool: Arc<PgPool>,
}

impl PgUserStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Vec<UserRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, username, email, password, is_active, is_staff, is_superuser
             FROM auth_user WHERE email = $1 ORDER BY id",
        )
        .bind(email)
        .fetch_all(&*self.pool)
        .await?;

        let users = rows
            .into_iter()
            .map(|row| UserRecord {
                id: row.get("id"),
                username: row.get("username"),
                email: row.get("email"),
                password: row.get("password"),
                is_active: row.get("is_active"),
                is_staff: row.get("is_staff"),
                is_superuser: row.get("is_superuser"),
            })
            .collect();

        Ok(users)
    }

    async fn save(&self, user: &UserRecord) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE auth_user
             SET is_active = $1, is_staff = $2, is_superuser = $3, password = $4
             WHERE id = $5",
        )
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(&user.password)
        .bind(user.id)
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id: user.id });
        }

        Ok(())
    }
}
