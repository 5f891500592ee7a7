// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Token signing configuration.

use std::env;

use crate::config::{TOKEN_LIFETIME_MS_ENV, TOKEN_SECRET_ENV};

/// Default token lifetime: 24 hours, in milliseconds.
pub const DEFAULT_TOKEN_LIFETIME_MS: i64 = 86_400_000;

/// Shared-secret token configuration.
///
/// Loaded once at process start and injected into [`TokenIssuer`] and
/// [`TokenVerifier`] instances at construction time; never mutated
/// afterwards. The same secret value must be provisioned to all three
/// services out-of-band — there is no runtime key negotiation.
///
/// [`TokenIssuer`]: super::TokenIssuer
/// [`TokenVerifier`]: super::TokenVerifier
#[derive(Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret, shared by all services.
    pub secret: String,
    /// Token lifetime in milliseconds.
    pub lifetime_ms: i64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, lifetime_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            lifetime_ms,
        }
    }

    /// Load the configuration from the environment.
    ///
    /// A missing `TOKEN_SECRET` is a fatal configuration error: the process
    /// must not come up able to issue or verify nothing, so this panics at
    /// startup rather than surfacing a runtime error later.
    pub fn from_env() -> Self {
        let secret = env::var(TOKEN_SECRET_ENV).unwrap_or_else(|_| {
            panic!("{TOKEN_SECRET_ENV} must be set (identical across all campus services)")
        });

        let lifetime_ms = env::var(TOKEN_LIFETIME_MS_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_MS);

        Self::new(secret, lifetime_ms)
    }
}

impl std::fmt::Debug for TokenConfig {
    // Never print the secret.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("lifetime_ms", &self.lifetime_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let config = TokenConfig::new("super-secret", DEFAULT_TOKEN_LIFETIME_MS);
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn default_lifetime_is_24h() {
        assert_eq!(DEFAULT_TOKEN_LIFETIME_MS, 24 * 60 * 60 * 1000);
    }
}
