use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all account and authentication operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Account already registered: {0}")]
    DuplicateAccount(String),

    /// Unknown email and wrong password report this same variant; callers
    /// cannot tell whether an account exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Malformed, tampered, and expired tokens, and tokens whose subject no
    /// longer resolves, are indistinguishable to callers.
    #[error("Invalid token")]
    InvalidToken,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),
}
