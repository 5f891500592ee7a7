// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Enrollment service: course enrollment requests behind the shared
//! token layer.

use std::net::SocketAddr;

use campus_services::api::enrollment_router;
use campus_services::auth::PublicPaths;
use campus_services::config::ServiceConfig;
use campus_services::state::AppState;
use campus_services::token::TokenConfig;
use campus_services::{logging, shutdown_signal};

const DEFAULT_PORT: u16 = 8083;

#[tokio::main]
async fn main() {
    logging::init();

    let service_config = ServiceConfig::from_env(DEFAULT_PORT);
    let token_config = TokenConfig::from_env();

    let state = AppState::new(&token_config, PublicPaths::standard());
    let app = enrollment_router(state);
    let addr = service_config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| panic!("Failed to bind {addr}: {err}"));
    tracing::info!(%addr, "enrollment service listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");
}
