// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Login and registration endpoints (auth service).

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::Role;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse};
use crate::password;
use crate::state::AppState;

/// Uniform login failure: identical for unknown identifiers and wrong
/// passwords so callers cannot enumerate accounts.
fn login_rejected() -> ApiError {
    ApiError::unauthorized("Invalid username or password")
}

/// Authenticate and issue a token.
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let account = {
        let store = state.store.read().await;
        store.find_by_identifier(&request.identifier).cloned()
    };

    let Some(account) = account else {
        tracing::debug!("login rejected: unknown identifier");
        return Err(login_rejected());
    };

    if !password::verify(&request.password, &account.password_hash) {
        tracing::debug!(subject = %account.username, "login rejected: password mismatch");
        return Err(login_rejected());
    }

    let token = state
        .issuer
        .issue(&account.username, account.role)
        .map_err(|err| ApiError::internal(format!("Token issuance failed: {err}")))?;
    let expires_at = state
        .verifier
        .expiry_of(&token)
        .map_err(|err| ApiError::internal(format!("Issued token failed verification: {err}")))?;

    tracing::info!(subject = %account.username, role = %account.role, "login succeeded");

    Ok(Json(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        subject: account.username,
        role: account.role,
        expires_at,
    }))
}

fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    let mut errors = HashMap::new();

    if request.username.trim().is_empty() {
        errors.insert("username".to_string(), "must not be empty".to_string());
    }
    if !request.email.contains('@') {
        errors.insert(
            "email".to_string(),
            "must be a valid email address".to_string(),
        );
    }
    if request.password.len() < 8 {
        errors.insert(
            "password".to_string(),
            "must be at least 8 characters".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(errors))
    }
}

/// Register a new account.
///
/// New accounts always start with the applicant role; role elevation is
/// an administrative action, never self-service.
#[utoipa::path(
    post,
    path = "/v1/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Username or email already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    validate_registration(&request)?;

    let password_hash = password::hash(&request.password).map_err(ApiError::internal)?;

    let account = {
        let mut store = state.store.write().await;
        store.insert_account(
            request.username,
            request.email,
            password_hash,
            Role::Applicant,
        )?
    };

    tracing::info!(subject = %account.username, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: account.user_id,
        }),
    ))
}
