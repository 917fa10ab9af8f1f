//! Authentication building blocks
//!
//! Provides the two leaf components every credential flow needs:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Bearer token issuance and validation (HS256, self-contained claims)
//!
//! Services compose these with their own account storage. The crate itself
//! performs no I/O and keeps no state beyond the signing key and the
//! configured validity window.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let token = issuer.issue("scientist@example.com", None).unwrap();
//! let subject = issuer.verify(&token).unwrap();
//! assert_eq!(subject, "scientist@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
