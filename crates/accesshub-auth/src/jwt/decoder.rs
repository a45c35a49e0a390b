//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use accesshub_core::config::auth::AuthConfig;
use accesshub_core::error::AppError;

use super::claims::Claims;

/// The single message produced for every verification failure. A caller must
/// not be able to distinguish expired from forged from malformed.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

/// Validates bearer tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is the only invalidation mechanism; no leeway.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Signature mismatch, malformed input, and expiry all collapse into one
    /// uniform unauthorized error so the endpoint cannot be used as an
    /// oracle. The underlying reason is logged at debug level only.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Token verification failed");
                AppError::unauthorized(INVALID_TOKEN_MESSAGE)
            })
    }
}
