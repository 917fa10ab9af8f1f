use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates self-contained bearer tokens.
///
/// Tokens are signed with HS256 (HMAC with SHA-256) and carry subject,
/// issued-at, and expiry claims. Validation is purely local: a token is
/// valid iff its signature verifies against the signing key and its expiry
/// has not passed. Nothing is persisted and nothing can be revoked.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenIssuer {
    /// Create a new issuer from a signing secret and default validity window.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `default_ttl` - Validity window used when `issue` is not given one
    ///
    /// # Returns
    /// TokenIssuer instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    /// - Rotate secrets periodically
    pub fn new(secret: &[u8], default_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            default_ttl,
        }
    }

    /// Issue a signed token for `subject`.
    ///
    /// The token embeds an absolute expiry of now + `ttl`, falling back to
    /// the issuer's default validity window when no ttl is given.
    ///
    /// # Arguments
    /// * `subject` - Identifier to embed as the token's subject claim
    /// * `ttl` - Optional validity window overriding the default
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, ttl.unwrap_or(self.default_ttl));
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return the embedded subject.
    ///
    /// The expiry claim is required and checked with zero leeway.
    ///
    /// # Arguments
    /// * `token` - Token string to validate
    ///
    /// # Returns
    /// The subject the token was issued to
    ///
    /// # Errors
    /// * `Expired` - The embedded expiry has passed
    /// * `Invalid` - Signature mismatch, or malformed/truncated input
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;

        Ok(token_data.claims.sub)
    }
}
