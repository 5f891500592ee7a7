// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::PublicPaths;
use crate::store::InMemoryStore;
use crate::token::{TokenConfig, TokenIssuer, TokenVerifier};

/// Shared application state.
///
/// Issuer and verifier are immutable after construction and shared
/// lock-free; only the store sits behind a lock, and it is never touched
/// on the verification path.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub issuer: Arc<TokenIssuer>,
    pub verifier: Arc<TokenVerifier>,
    pub public_paths: Arc<PublicPaths>,
}

impl AppState {
    pub fn new(token_config: &TokenConfig, public_paths: PublicPaths) -> Self {
        Self {
            store: Arc::new(RwLock::new(InMemoryStore::new())),
            issuer: Arc::new(TokenIssuer::new(token_config)),
            verifier: Arc::new(TokenVerifier::new(token_config)),
            public_paths: Arc::new(public_paths),
        }
    }
}

impl Default for AppState {
    /// Test convenience: fixed secret, standard public paths.
    fn default() -> Self {
        Self::new(
            &TokenConfig::new("test-secret-not-for-production", 86_400_000),
            PublicPaths::standard(),
        )
    }
}
