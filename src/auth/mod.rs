// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! # Authentication Layer
//!
//! The per-request authentication and authorization machinery shared by
//! all three campus services.
//!
//! ## Request Flow
//!
//! 1. The [interceptor](middleware) extracts `Authorization: Bearer <token>`
//!    (literal, case-sensitive scheme) and verifies it against the shared
//!    secret; on success a [`VerifiedIdentity`] is attached to the request.
//!    The interceptor never rejects — it is strictly pass-through.
//! 2. The [gate] consults the service's declared public paths; anything
//!    else without an established identity is rejected with 401.
//! 3. Handlers pick the identity up via the [`Auth`](extractor::Auth)
//!    extractor and apply role checks where required.
//!
//! ## Security
//!
//! - All failure modes fail closed: an ambiguous or erroring verification
//!   is "not authenticated", never "authenticated by default".
//! - Verification is local CPU work only; no service ever calls back to
//!   the auth service.

pub mod error;
pub mod extractor;
pub mod gate;
pub mod identity;
pub mod middleware;
pub mod roles;

pub use error::AuthError;
pub use extractor::{AdministratorOnly, Auth};
pub use gate::{authorization_gate, PublicPaths};
pub use identity::VerifiedIdentity;
pub use middleware::security_context;
pub use roles::Role;
