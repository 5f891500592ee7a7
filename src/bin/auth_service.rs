// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Auth service: the single token issuer of the deployment.

use std::env;
use std::net::SocketAddr;

use campus_services::api::auth_router;
use campus_services::auth::{PublicPaths, Role};
use campus_services::config::{
    ServiceConfig, SEED_ADMIN_PASSWORD_ENV, SEED_ADMIN_USERNAME_ENV,
};
use campus_services::password;
use campus_services::state::AppState;
use campus_services::token::TokenConfig;
use campus_services::{logging, shutdown_signal};

const DEFAULT_PORT: u16 = 8081;

#[tokio::main]
async fn main() {
    logging::init();

    let service_config = ServiceConfig::from_env(DEFAULT_PORT);
    let token_config = TokenConfig::from_env();

    // Login and registration must be reachable without a token; they are
    // where tokens come from.
    let public_paths = PublicPaths::standard()
        .also("/v1/auth/login")
        .also("/v1/auth/register");

    let state = AppState::new(&token_config, public_paths);
    seed_admin_account(&state).await;

    let app = auth_router(state);
    let addr = service_config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| panic!("Failed to bind {addr}: {err}"));
    tracing::info!(%addr, "auth service listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");
}

/// Seed an administrator account from the environment, if configured.
/// Without it a fresh deployment has no way to reach admin endpoints.
async fn seed_admin_account(state: &AppState) {
    let (Ok(username), Ok(admin_password)) = (
        env::var(SEED_ADMIN_USERNAME_ENV),
        env::var(SEED_ADMIN_PASSWORD_ENV),
    ) else {
        tracing::warn!("no seed administrator configured");
        return;
    };

    let hash = password::hash(&admin_password).expect("Failed to hash seed password");
    let email = format!("{username}@campus.local");

    let mut store = state.store.write().await;
    match store.insert_account(username.clone(), email, hash, Role::Administrator) {
        Ok(_) => tracing::info!(%username, "seeded administrator account"),
        Err(err) => tracing::error!(%username, error = %err.message, "failed to seed administrator"),
    }
}
