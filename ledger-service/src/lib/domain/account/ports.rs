use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::RegisterCommand;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email and password
    ///
    /// # Returns
    /// Created account entity (the password hash is never exposed to callers)
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email is already registered
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError>;

    /// Verify credentials and issue a bearer token for the account.
    ///
    /// # Arguments
    /// * `email` - Email address to authenticate
    /// * `password` - Plain text password to verify
    ///
    /// # Returns
    /// Signed bearer token with the account email as subject
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, merged into
    ///   one indistinguishable error
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<String, AccountError>;

    /// Resolve a bearer token to the account it was issued to.
    ///
    /// # Arguments
    /// * `token` - Raw token string
    ///
    /// # Returns
    /// The account the token's subject resolves to
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, tampered, or expired token, or a subject
    ///   that no longer exists, merged into one indistinguishable error
    async fn authenticate(&self, token: &str) -> Result<Account, AccountError>;
}

/// Persistence operations for the account directory.
#[async_trait]
pub trait AccountDirectory: Send + Sync + 'static {
    /// Persist a new account, assigning its id.
    ///
    /// The duplicate check and the insert are atomic: of two concurrent
    /// inserts for the same email, exactly one succeeds. Ids are strictly
    /// increasing and only successful inserts consume one.
    ///
    /// # Arguments
    /// * `email` - Unique, case-sensitive directory key
    /// * `password_hash` - Hashed secret to store alongside
    ///
    /// # Returns
    /// Created account entity with its assigned id
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email key is already present; no partial state
    ///   is left behind
    async fn insert(
        &self,
        email: &EmailAddress,
        password_hash: &str,
    ) -> Result<Account, AccountError>;

    /// Retrieve an account by email.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError>;
}
