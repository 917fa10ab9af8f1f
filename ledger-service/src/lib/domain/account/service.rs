use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::ports::AccountDirectory;
use crate::domain::account::ports::AuthServicePort;

/// Domain service implementation for authentication flows.
///
/// Composes the account directory, password hasher, and token issuer into
/// the register/login/authenticate operations. The issuer is constructed at
/// startup and injected; the service holds no other configuration.
pub struct AuthService<D>
where
    D: AccountDirectory,
{
    directory: Arc<D>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl<D> AuthService<D>
where
    D: AccountDirectory,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - Account persistence implementation
    /// * `token_issuer` - Configured bearer token issuer
    ///
    /// # Returns
    /// Configured authentication service instance
    pub fn new(directory: Arc<D>, token_issuer: TokenIssuer) -> Self {
        Self {
            directory,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: AccountDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError> {
        if self
            .directory
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AccountError::DuplicateAccount(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        // The directory re-checks under its own lock; losing a race with a
        // concurrent registration surfaces here as DuplicateAccount.
        self.directory.insert(&command.email, &password_hash).await
    }

    async fn login(&self, email: &EmailAddress, password: &str) -> Result<String, AccountError> {
        let account = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &account.password_hash) {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(account.email.as_str(), None)?;

        Ok(token)
    }

    async fn authenticate(&self, token: &str) -> Result<Account, AccountError> {
        let subject = self.token_issuer.verify(token).map_err(|e| {
            tracing::warn!("Token rejected: {}", e);
            AccountError::InvalidToken
        })?;

        let email = EmailAddress::new(subject).map_err(|_| AccountError::InvalidToken)?;

        self.directory
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidToken)
    }
}
