// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::token::TokenError;

/// Authentication error type.
///
/// Produced by the extractors and the authorization gate. Inside the
/// request interceptor nothing is ever surfaced — verification failures
/// there collapse into "no identity" and only the gate turns the absence
/// of an identity on a protected path into a response.
#[derive(Debug)]
pub enum AuthError {
    /// No authorization header present
    MissingAuthHeader,
    /// Authorization header present but not `Bearer <token>`
    InvalidAuthHeader,
    /// Token is malformed
    MalformedToken,
    /// Token signature is invalid (includes a mismatched shared secret)
    InvalidSignature,
    /// Token has expired
    TokenExpired,
    /// Token uses an unexpected algorithm or claim shape
    UnsupportedToken,
    /// Protected path reached without an established identity
    NotAuthenticated,
    /// Authenticated but lacking the required role
    InsufficientPermissions,
    /// Internal error
    InternalError(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthHeader => "missing_auth_header",
            AuthError::InvalidAuthHeader => "invalid_auth_header",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::UnsupportedToken => "unsupported_token",
            AuthError::NotAuthenticated => "authentication_required",
            AuthError::InsufficientPermissions => "insufficient_permissions",
            AuthError::InternalError(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::InvalidAuthHeader
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::UnsupportedToken
            | AuthError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
            AuthError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Empty => AuthError::InvalidAuthHeader,
            TokenError::Malformed => AuthError::MalformedToken,
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::InvalidSignature => AuthError::InvalidSignature,
            TokenError::Unsupported => AuthError::UnsupportedToken,
            TokenError::Internal(msg) => AuthError::InternalError(msg),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingAuthHeader => write!(f, "Authorization header is required"),
            AuthError::InvalidAuthHeader => {
                write!(f, "Invalid authorization header format (expected 'Bearer <token>')")
            }
            AuthError::MalformedToken => write!(f, "Token is malformed"),
            AuthError::InvalidSignature => write!(f, "Token signature is invalid"),
            AuthError::TokenExpired => write!(f, "Token has expired"),
            AuthError::UnsupportedToken => {
                write!(f, "Token uses an unsupported algorithm or claim shape")
            }
            AuthError::NotAuthenticated => {
                write!(f, "Authentication is required to access this resource")
            }
            AuthError::InsufficientPermissions => {
                write!(f, "Insufficient permissions for this operation")
            }
            AuthError::InternalError(msg) => write!(f, "Internal authentication error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_authenticated_returns_401() {
        let response = AuthError::NotAuthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error_code"], "authentication_required");
    }

    #[tokio::test]
    async fn insufficient_permissions_returns_403() {
        let response = AuthError::InsufficientPermissions.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn token_errors_map_onto_auth_errors() {
        assert!(matches!(
            AuthError::from(TokenError::Expired),
            AuthError::TokenExpired
        ));
        assert!(matches!(
            AuthError::from(TokenError::InvalidSignature),
            AuthError::InvalidSignature
        ));
        assert!(matches!(
            AuthError::from(TokenError::Malformed),
            AuthError::MalformedToken
        ));
    }
}
