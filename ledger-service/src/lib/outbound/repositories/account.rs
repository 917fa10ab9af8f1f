use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::ports::AccountDirectory;

/// In-process account directory keyed by email.
///
/// The duplicate check and the insert happen under one write-lock
/// acquisition, so of two concurrent registrations for the same email
/// exactly one succeeds. The id counter advances only on successful insert.
pub struct InMemoryAccountDirectory {
    inner: RwLock<DirectoryInner>,
}

struct DirectoryInner {
    accounts: HashMap<String, Account>,
    next_id: u64,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryInner {
                accounts: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryAccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn insert(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<Account, AccountError> {
        let mut inner = self.inner.write().await;

        if inner.accounts.contains_key(email.as_str()) {
            return Err(AccountError::DuplicateAccount(email.as_str().to_string()));
        }

        let account = Account {
            id: AccountId(inner.next_id),
            email: email.clone(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner
            .accounts
            .insert(email.as_str().to_string(), account.clone());

        Ok(account)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError> {
        let inner = self.inner.read().await;

        Ok(inner.accounts.get(email.as_str()).cloned())
    }
}
