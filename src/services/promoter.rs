use crate::database::UserStore;
use crate::error::PromoteError;
use crate::models::UserRecord;
use crate::utils::password::make_password;

/// Grants admin flags (and optionally a new password) to every account matching an email.
pub struct Promoter<S> {
    store: S,
    bcrypt_cost: u32,
}

impl<S: UserStore> Promoter<S> {
    pub fn new(store: S, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Promote all accounts with `email`, one result per matched account.
    ///
    /// A lookup failure is reported as a single `Err` and nothing is mutated.
    /// Each matched account succeeds or fails on its own; failures are logged here.
    pub async fn try_promote(&self, email: &str, new_password: Option<&str>) -> Vec<Result<UserRecord, PromoteError>> {
        let users = match self.store.find_by_email(email).await {
            Ok(users) => users,
            Err(source) => {
                let err = PromoteError::Lookup {
                    email: email.to_string(),
                    source,
                };
                tracing::error!(email = %email, error = %err, "Failed to promote user");
                return vec![Err(err)];
            }
        };

        if users.is_empty() {
            tracing::info!(email = %email, "No user with this email, skipping");
        }

        let new_password = new_password.filter(|p| !p.is_empty());
        let mut results = Vec::with_capacity(users.len());
        for user in users {
            let result = self.promote_one(user, new_password).await;
            match &result {
                Ok(user) => tracing::info!(
                    email = %email,
                    user_id = user.id,
                    password_changed = new_password.is_some(),
                    "Promoted user to admin"
                ),
                Err(err) => tracing::error!(email = %email, error = %err, "Failed to promote user"),
            }
            results.push(result);
        }
        results
    }

    /// Accounts with `email` that were promoted and saved.
    pub async fn promote(&self, email: &str, new_password: Option<&str>) -> Vec<UserRecord> {
        self.try_promote(email, new_password)
            .await
            .into_iter()
            .filter_map(Result::ok)
            .collect()
    }

    async fn promote_one(&self, mut user: UserRecord, new_password: Option<&str>) -> Result<UserRecord, PromoteError> {
        user.grant_admin();

        if let Some(raw) = new_password {
            user.password = make_password(raw, self.bcrypt_cost).map_err(|source| PromoteError::Hash {
                user_id: user.id,
                source,
            })?;
        }

        self.store.save(&user).await.map_err(|source| PromoteError::Save {
            user_id: user.id,
            email: user.email.clone(),
            source,
        })?;

        Ok(user)
    }
}
