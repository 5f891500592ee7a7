// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Token claims.

use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// Claims carried by every campus token.
///
/// The role is embedded at issuance so that downstream services can
/// authorize by role without calling back to the auth service. A token
/// missing any of these claims is rejected as invalid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the principal's stable identifier (username).
    pub sub: String,

    /// The principal's primary role at issuance time.
    pub role: Role,

    /// Issued-at timestamp (Unix seconds).
    pub iat: i64,

    /// Expiry timestamp (Unix seconds). Valid only while `now < exp`.
    pub exp: i64,
}
