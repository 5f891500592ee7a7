// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! # Runtime Configuration
//!
//! Environment variable names and defaults used by the three services.
//! Configuration is loaded from the environment once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `TOKEN_SECRET` | Shared HMAC signing secret; identical across services | Required |
//! | `TOKEN_LIFETIME_MS` | Token lifetime in milliseconds | `86400000` (24h) |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | per-service default |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |
//! | `SEED_ADMIN_USERNAME` | Administrator account seeded at startup (auth service) | Unset |
//! | `SEED_ADMIN_PASSWORD` | Password for the seeded administrator | Unset |

use std::env;

/// Shared HMAC signing secret. Must hold the identical value in every
/// service process; provisioning happens out-of-band.
pub const TOKEN_SECRET_ENV: &str = "TOKEN_SECRET";

/// Token lifetime in milliseconds.
pub const TOKEN_LIFETIME_MS_ENV: &str = "TOKEN_LIFETIME_MS";

/// Server bind address.
pub const HOST_ENV: &str = "HOST";

/// Server bind port.
pub const PORT_ENV: &str = "PORT";

/// Logging format: `json` or `pretty`.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Username of the administrator account seeded at auth service startup.
pub const SEED_ADMIN_USERNAME_ENV: &str = "SEED_ADMIN_USERNAME";

/// Password of the seeded administrator account.
pub const SEED_ADMIN_PASSWORD_ENV: &str = "SEED_ADMIN_PASSWORD";

/// Bind configuration common to all services.
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    /// Load `HOST`/`PORT`, falling back to the service's default port.
    pub fn from_env(default_port: u16) -> Self {
        let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var(PORT_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default_port);
        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 8081,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
    }
}
