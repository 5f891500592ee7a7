// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Campus Services: token-secured academic administration services.
//!
//! One crate, three binaries sharing a single authentication core:
//!
//! - `auth-service` authenticates credentials and issues signed bearer
//!   tokens (it is the only issuer).
//! - `intranet-service` serves academic records.
//! - `enrollment-service` files course enrollment requests.
//!
//! Every service verifies tokens locally against the same shared secret,
//! so a token issued by the auth service carries identity across the
//! whole deployment with no inter-service calls. The [`token`] module is
//! the framework-free core of that scheme; [`auth`] binds it to HTTP.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod password;
pub mod state;
pub mod store;
pub mod token;

/// Resolves on SIGINT or SIGTERM so servers drain in-flight requests
/// before exiting.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
