// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! # Token Protocol
//!
//! The shared-secret token protocol used by all three campus services.
//! This module is framework-free: it knows nothing about HTTP, routers,
//! or request lifecycles, so every service links against the exact same
//! protocol code and drift between services is impossible.
//!
//! ## Wire Format
//!
//! Tokens are standard three-segment JWTs signed with HMAC-SHA256:
//!
//! - header: `{"alg":"HS256","typ":"JWT"}`
//! - payload: `sub` (subject), `role`, `iat`, `exp` (Unix seconds)
//! - signature: HMAC over header + payload with the shared secret
//!
//! Any two services provisioned with the same secret cross-validate each
//! other's tokens; a mismatched secret fails verification universally
//! (fail-closed). Tokens are immutable and never persisted server-side:
//! expiry is the only termination mechanism.

pub mod claims;
pub mod config;
pub mod issuer;
pub mod verifier;

pub use claims::Claims;
pub use config::TokenConfig;
pub use issuer::TokenIssuer;
pub use verifier::{TokenError, TokenVerifier};
