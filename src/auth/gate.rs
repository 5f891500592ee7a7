// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Authorization gate.
//!
//! Evaluated once per request, after the
//! [interceptor](super::middleware) has had its chance to establish a
//! security context. A fixed, ordered list of public path prefixes is
//! consulted first (first match wins); everything else requires an
//! established identity or is rejected with 401.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::AuthError;
use super::identity::VerifiedIdentity;
use crate::state::AppState;

/// Declarative list of unauthenticated path prefixes.
///
/// Matching is by prefix, in declaration order, first match wins. HTTP
/// `OPTIONS` requests (CORS pre-flight) are always public regardless of
/// path.
#[derive(Debug, Clone)]
pub struct PublicPaths {
    patterns: Vec<String>,
}

impl PublicPaths {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Paths every service declares public: health probes and API docs.
    pub fn standard() -> Self {
        Self::new(["/health", "/docs", "/api-doc"])
    }

    /// Append another public path prefix.
    pub fn also(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Check whether a request target is public.
    pub fn is_public(&self, method: &Method, path: &str) -> bool {
        if method == Method::OPTIONS {
            return true;
        }
        self.patterns
            .iter()
            .any(|pattern| path.starts_with(pattern.as_str()))
    }
}

/// Gate middleware: reject protected requests with no identity.
pub async fn authorization_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state
        .public_paths
        .is_public(request.method(), request.uri().path())
    {
        return next.run(request).await;
    }

    if request.extensions().get::<VerifiedIdentity>().is_none() {
        tracing::debug!(
            method = %request.method(),
            path = request.uri().path(),
            "unauthenticated request to protected path"
        );
        return AuthError::NotAuthenticated.into_response();
    }

    next.run(request).await
}
