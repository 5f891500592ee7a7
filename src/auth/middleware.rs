// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Per-request security context interceptor.
//!
//! Every service mounts this middleware on its whole router. It extracts a
//! bearer token from the request, verifies it against the shared secret,
//! and on success attaches a [`VerifiedIdentity`] to the request
//! extensions. It is strictly pass-through: an invalid or absent token
//! leaves the request unauthenticated and processing continues — the
//! [authorization gate](super::gate) decides acceptance afterwards.
//!
//! No network call is made here under any circumstances; trust is
//! possession of the shared signing secret.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use super::identity::VerifiedIdentity;
use crate::state::AppState;

/// Literal scheme prefix; matched case-sensitively.
const BEARER_PREFIX: &str = "Bearer ";

/// Extract the candidate token from the Authorization header.
///
/// Returns `None` when the header is missing, is not valid UTF-8, or does
/// not start with the exact `Bearer ` prefix (`Basic`, lowercase `bearer`
/// and friends are treated identically to no credential at all).
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// Request interceptor establishing the security context.
///
/// State machine per request: UNAUTHENTICATED initially; AUTHENTICATED
/// only after the verifier accepts the candidate token. Terminal either
/// way — the pipeline always proceeds.
pub async fn security_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(candidate) = bearer_token(request.headers()) {
        if state.verifier.validate(candidate) {
            match state.verifier.decode(candidate) {
                Ok(claims) => {
                    let origin = request
                        .extensions()
                        .get::<ConnectInfo<SocketAddr>>()
                        .map(|info| info.0);
                    let identity = VerifiedIdentity::from_claims(claims, origin);
                    tracing::debug!(
                        subject = %identity.subject,
                        role = %identity.role,
                        origin = ?identity.origin,
                        "request authenticated"
                    );
                    request.extensions_mut().insert(identity);
                }
                Err(err) => {
                    // Fail closed: validate accepted but extraction did
                    // not; clear whatever was established and continue
                    // unauthenticated.
                    tracing::warn!(
                        category = err.category(),
                        "token extraction failed after validation: {err}"
                    );
                    request.extensions_mut().remove::<VerifiedIdentity>();
                }
            }
        }
        // Invalid candidate: the verifier already logged the diagnostic
        // category; the request continues with no identity.
    }

    next.run(request).await
}
