// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Token issuance.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use super::claims::Claims;
use super::config::TokenConfig;
use super::verifier::TokenError;
use crate::auth::Role;

/// Issues signed, time-bounded tokens for authenticated principals.
///
/// Issuance is pure computation: no persistence, no network, no record of
/// issued tokens. The token itself is the only record of the session.
pub struct TokenIssuer {
    key: EncodingKey,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.secret.as_bytes()),
            lifetime: Duration::milliseconds(config.lifetime_ms),
        }
    }

    /// Issue a token for `subject` with the configured lifetime.
    pub fn issue(&self, subject: &str, role: Role) -> Result<String, TokenError> {
        self.issue_with_lifetime(subject, role, self.lifetime)
    }

    /// Issue a token with an explicit lifetime.
    ///
    /// Used for short-lived tokens; a non-positive lifetime produces a
    /// structurally valid but already-expired token.
    pub fn issue_with_lifetime(
        &self,
        subject: &str,
        role: Role,
        lifetime: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|err| TokenError::Internal(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenVerifier;

    fn test_config() -> TokenConfig {
        TokenConfig::new("unit-test-secret", 86_400_000)
    }

    #[test]
    fn issued_token_has_three_segments() {
        let issuer = TokenIssuer::new(&test_config());
        let token = issuer.issue("docente.demo", Role::Instructor).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn issued_token_round_trips_subject_and_role() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let token = issuer.issue("docente.demo", Role::Instructor).unwrap();
        let claims = verifier.decode(&token).unwrap();

        assert_eq!(claims.sub, "docente.demo");
        assert_eq!(claims.role, Role::Instructor);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn lifetime_controls_expiry_claim() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let token = issuer.issue("docente.demo", Role::Instructor).unwrap();
        let claims = verifier.decode(&token).unwrap();

        // 24h lifetime, allowing a little slack for test execution time.
        let lifetime_secs = claims.exp - claims.iat;
        assert!((86_399..=86_401).contains(&lifetime_secs));
    }

    #[test]
    fn non_positive_lifetime_yields_expired_token() {
        let config = test_config();
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let token = issuer
            .issue_with_lifetime("docente.demo", Role::Instructor, Duration::hours(-25))
            .unwrap();

        assert!(!verifier.validate(&token));
        assert_eq!(verifier.decode(&token).unwrap_err(), TokenError::Expired);
    }
}
