// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Request-scoped security context.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::roles::Role;
use crate::token::Claims;

/// Identity established for the current request from a verified token.
///
/// This is deliberately minimal: it carries what the token asserts and
/// nothing more. The richer principal record (`UserAccount`) lives in the
/// credential store and is resolved separately by business code when it is
/// actually needed — the two types are never conflated.
///
/// Derived fresh from the token on every request and dropped with it;
/// never shared across requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifiedIdentity {
    /// Subject asserted by the token (username).
    pub subject: String,

    /// Primary role asserted by the token.
    pub role: Role,

    /// Token expiry (Unix seconds; kept for logging, not serialized).
    #[serde(skip)]
    pub expires_at: i64,

    /// Origin address of the request, attached for audit logging.
    #[serde(skip)]
    pub origin: Option<SocketAddr>,
}

impl VerifiedIdentity {
    /// Build the security context from verified claims.
    pub fn from_claims(claims: Claims, origin: Option<SocketAddr>) -> Self {
        Self {
            subject: claims.sub,
            role: claims.role,
            expires_at: claims.exp,
            origin,
        }
    }

    /// Check if the identity satisfies the required role.
    pub fn has_role(&self, required: Role) -> bool {
        self.role.has_privilege(required)
    }

    /// Check if this identity is an administrator.
    pub fn is_administrator(&self) -> bool {
        self.role == Role::Administrator
    }
}
