// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Token verification.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use thiserror::Error;

use super::claims::Claims;
use super::config::TokenConfig;

/// Why a candidate token was rejected.
///
/// Every failure mode collapses to "not authenticated" at the HTTP
/// boundary; the variants exist so rejections are logged under a stable
/// diagnostic category. A signature produced with a different secret is
/// indistinguishable from tampering and fails closed like everything else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Empty or blank candidate. Treated as "no credential", never logged
    /// as an error.
    #[error("token is empty")]
    Empty,

    /// Structurally not a token (wrong segment count, bad base64, bad
    /// JSON, missing claims).
    #[error("token is malformed")]
    Malformed,

    /// Signature valid but the expiry timestamp has passed.
    #[error("token has expired")]
    Expired,

    /// Signature does not verify against the configured secret.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Structurally a token but with an unexpected algorithm or claim
    /// shape.
    #[error("token uses an unsupported algorithm or claim shape")]
    Unsupported,

    /// Unexpected internal failure during signing or verification.
    #[error("internal token error: {0}")]
    Internal(String),
}

impl TokenError {
    /// Stable category string for structured logs.
    pub fn category(&self) -> &'static str {
        match self {
            TokenError::Empty => "empty",
            TokenError::Malformed => "malformed",
            TokenError::Expired => "expired",
            TokenError::InvalidSignature => "signature",
            TokenError::Unsupported => "unsupported",
            TokenError::Internal(_) => "other",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm => TokenError::Unsupported,
            ErrorKind::ImmatureSignature => TokenError::Unsupported,
            _ => TokenError::Malformed,
        }
    }
}

/// Verifies candidate tokens against the shared secret.
///
/// Verification is pure, synchronous and CPU-bound (an HMAC recompute plus
/// comparison), so a single instance is shared across all request workers
/// without locking.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // A token is valid strictly while now < exp; all issuers and
        // verifiers share one deployment, so no clock-skew leeway.
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Check a candidate token: true iff the signature verifies against
    /// the configured secret and the token has not expired.
    ///
    /// Never panics and never propagates an error; every failure mode is
    /// converted to `false`. Rejections other than an empty candidate are
    /// logged with their diagnostic category.
    pub fn validate(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(_) => true,
            Err(TokenError::Empty) => false,
            Err(err) => {
                tracing::debug!(category = err.category(), "rejected bearer token: {err}");
                false
            }
        }
    }

    /// Decode and verify a candidate token, returning its claims.
    ///
    /// This is the extraction API: callers get an explicit [`TokenError`]
    /// instead of being required to call [`validate`](Self::validate)
    /// first.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::Empty);
        }

        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)
    }

    /// Subject of a valid token.
    pub fn subject_of(&self, token: &str) -> Result<String, TokenError> {
        self.decode(token).map(|claims| claims.sub)
    }

    /// Expiry timestamp (Unix seconds) of a valid token.
    pub fn expiry_of(&self, token: &str) -> Result<i64, TokenError> {
        self.decode(token).map(|claims| claims.exp)
    }
}
