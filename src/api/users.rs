// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Identity echo and account administration endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::{AdministratorOnly, Auth, Role, VerifiedIdentity};
use crate::error::ApiError;
use crate::models::AccountSummary;
use crate::state::AppState;

/// What the verified token asserts about the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserMeResponse {
    /// Token subject (username).
    pub subject: String,
    /// Role carried by the token.
    pub role: Role,
}

impl From<VerifiedIdentity> for UserMeResponse {
    fn from(identity: VerifiedIdentity) -> Self {
        Self {
            subject: identity.subject,
            role: identity.role,
        }
    }
}

/// Echo the identity asserted by the presented token.
#[utoipa::path(
    get,
    path = "/v1/users/me",
    tag = "Users",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The caller's verified identity", body = UserMeResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_current_user(Auth(identity): Auth) -> Json<UserMeResponse> {
    Json(UserMeResponse::from(identity))
}

/// List all accounts. Administrators only.
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "All accounts", body = [AccountSummary]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an administrator")
    )
)]
pub async fn list_accounts(
    AdministratorOnly(identity): AdministratorOnly,
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountSummary>>, ApiError> {
    tracing::debug!(subject = %identity.subject, "listing accounts");
    let store = state.store.read().await;
    let accounts = store
        .list_accounts()
        .into_iter()
        .map(AccountSummary::from)
        .collect();
    Ok(Json(accounts))
}
