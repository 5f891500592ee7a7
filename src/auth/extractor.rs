// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Axum extractors for authenticated requests.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(identity): Auth) -> impl IntoResponse {
//!     // identity is VerifiedIdentity
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::AuthError;
use super::identity::VerifiedIdentity;
use super::middleware::bearer_token;
use crate::state::AppState;

/// Extractor for authenticated requests.
///
/// Normally the [interceptor](super::middleware) has already attached a
/// [`VerifiedIdentity`] to the request extensions and this extractor just
/// picks it up. When a handler is called outside the full middleware
/// stack (handler-level tests), it falls back to verifying the
/// Authorization header directly against the state's verifier.
pub struct Auth(pub VerifiedIdentity);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<VerifiedIdentity>().cloned() {
            return Ok(Auth(identity));
        }

        if !parts.headers.contains_key(axum::http::header::AUTHORIZATION) {
            return Err(AuthError::MissingAuthHeader);
        }
        let candidate = bearer_token(&parts.headers).ok_or(AuthError::InvalidAuthHeader)?;
        let claims = state.verifier.decode(candidate).map_err(AuthError::from)?;

        Ok(Auth(VerifiedIdentity::from_claims(claims, None)))
    }
}

/// Extractor that requires the administrator role.
pub struct AdministratorOnly(pub VerifiedIdentity);

impl FromRequestParts<AppState> for AdministratorOnly {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Auth(identity) = Auth::from_request_parts(parts, state).await?;

        if !identity.is_administrator() {
            return Err(AuthError::InsufficientPermissions);
        }

        Ok(AdministratorOnly(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use axum::http::Request;

    fn parts_for(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    fn identity(subject: &str, role: Role) -> VerifiedIdentity {
        VerifiedIdentity {
            subject: subject.to_string(),
            role,
            expires_at: 0,
            origin: None,
        }
    }

    #[tokio::test]
    async fn auth_requires_auth_header() {
        let state = AppState::default();
        let mut parts = parts_for(Request::builder().uri("/test").body(()).unwrap());

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn auth_prefers_interceptor_extensions() {
        let state = AppState::default();
        let mut parts = parts_for(Request::builder().uri("/test").body(()).unwrap());
        parts
            .extensions
            .insert(identity("coordinadora.demo", Role::Coordinator));

        let result = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(result.0.subject, "coordinadora.demo");
    }

    #[tokio::test]
    async fn auth_falls_back_to_header_verification() {
        let state = AppState::default();
        let token = state.issuer.issue("alumno.demo", Role::Student).unwrap();
        let mut parts = parts_for(
            Request::builder()
                .uri("/test")
                .header("Authorization", format!("Bearer {token}"))
                .body(())
                .unwrap(),
        );

        let result = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(result.0.subject, "alumno.demo");
        assert_eq!(result.0.role, Role::Student);
    }

    #[tokio::test]
    async fn auth_rejects_wrong_scheme_as_invalid_header() {
        let state = AppState::default();
        let mut parts = parts_for(
            Request::builder()
                .uri("/test")
                .header("Authorization", "Basic xyz")
                .body(())
                .unwrap(),
        );

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn administrator_only_rejects_other_roles() {
        let state = AppState::default();
        let mut parts = parts_for(Request::builder().uri("/test").body(()).unwrap());
        parts
            .extensions
            .insert(identity("docente.demo", Role::Instructor));

        let result = AdministratorOnly::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InsufficientPermissions)));
    }

    #[tokio::test]
    async fn administrator_only_accepts_administrators() {
        let state = AppState::default();
        let mut parts = parts_for(Request::builder().uri("/test").body(()).unwrap());
        parts
            .extensions
            .insert(identity("rectorado", Role::Administrator));

        let result = AdministratorOnly::from_request_parts(&mut parts, &state).await;
        assert!(result.is_ok());
    }

}
