//! Account Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Account, AccountUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const FIELDS: &str = "email, title, firstName, lastName, role, status";

#[derive(Clone)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all accounts ordered by email
    pub async fn find_all(&self) -> RepoResult<Vec<Account>> {
        let accounts: Vec<Account> = self
            .base
            .db()
            .query(format!("SELECT {FIELDS} FROM account ORDER BY email"))
            .await?
            .take(0)?;
        Ok(accounts)
    }

    /// Find account by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {FIELDS} FROM account WHERE email = $email LIMIT 1"
            ))
            .bind(("email", email_owned))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Create a new account
    ///
    /// The email is the record key; duplicates are rejected.
    pub async fn create(&self, data: Account) -> RepoResult<Account> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Account '{}' already exists",
                data.email
            )));
        }

        let email = data.email.clone();
        self.base
            .db()
            .query("CREATE type::thing('account', $email) CONTENT $data RETURN NONE")
            .bind(("email", email.clone()))
            .bind(("data", data))
            .await?;

        self.find_by_email(&email)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
    }

    /// Update an account (the email itself cannot change)
    pub async fn update(&self, email: &str, data: AccountUpdate) -> RepoResult<Account> {
        self.find_by_email(email)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Account '{}'", email)))?;

        self.base
            .db()
            .query("UPDATE type::thing('account', $email) MERGE $data RETURN NONE")
            .bind(("email", email.to_string()))
            .bind(("data", data))
            .await?;

        self.find_by_email(email)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Account '{}'", email)))
    }

    /// Delete an account; no-op (returns false) when the email is unknown
    ///
    /// Employees referencing the email keep their reference; it simply
    /// becomes orphaned.
    pub async fn delete(&self, email: &str) -> RepoResult<bool> {
        if self.find_by_email(email).await?.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query("DELETE type::thing('account', $email)")
            .bind(("email", email.to_string()))
            .await?;
        Ok(true)
    }
}
