// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! # API Data Models
//!
//! Request and response structures used by the three services' REST APIs,
//! plus the domain records the intranet and enrollment services serve.
//! All wire types derive `Serialize`/`Deserialize` and `ToSchema` for
//! JSON handling and OpenAPI documentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Role;

// =============================================================================
// Accounts
// =============================================================================

/// A principal stored in the credential store.
///
/// Holds the salted password hash; never serialized to the wire. Use
/// [`AccountSummary`] for API responses.
#[derive(Debug, Clone)]
pub struct UserAccount {
    /// Stable internal identifier.
    pub user_id: Uuid,
    /// Login name; doubles as the token subject.
    pub username: String,
    /// Contact email; also accepted as a login identifier.
    pub email: String,
    /// Argon2 PHC-format password hash.
    pub password_hash: String,
    /// The principal's single primary role.
    pub role: Role,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

/// Account fields safe to expose over the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AccountSummary {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&UserAccount> for AccountSummary {
    fn from(account: &UserAccount) -> Self {
        Self {
            user_id: account.user_id,
            username: account.username.clone(),
            email: account.email.clone(),
            role: account.role,
            created_at: account.created_at,
        }
    }
}

// =============================================================================
// Authentication
// =============================================================================

/// Login request: the identifier may be a username or an email address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username or email address.
    pub identifier: String,
    /// Plaintext password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// The signed bearer token.
    pub token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Subject the token asserts (username).
    pub subject: String,
    /// Role embedded in the token.
    pub role: Role,
    /// Token expiry (Unix seconds).
    pub expires_at: i64,
}

/// Registration request. New accounts start as applicants.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user_id: Uuid,
}

// =============================================================================
// Academic Records (intranet service)
// =============================================================================

/// A grade entry in a student's academic record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AcademicRecord {
    /// Unique identifier for this entry.
    pub id: String,
    /// Username of the student the entry belongs to.
    pub student: String,
    /// Course code.
    pub course: String,
    /// Grade as recorded.
    pub grade: String,
    /// Academic term (e.g. `2026-1`).
    pub term: String,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Request to record a grade entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecordRequest {
    pub student: String,
    pub course: String,
    pub grade: String,
    pub term: String,
}

// =============================================================================
// Enrollments (enrollment service)
// =============================================================================

/// An enrollment request filed by a student or applicant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Enrollment {
    /// Unique identifier for this enrollment.
    pub id: String,
    /// Username of the requesting student.
    pub student: String,
    /// Course code being enrolled in.
    pub course: String,
    /// Processing status; new requests start as `pending`.
    pub status: String,
    /// When the request was filed.
    pub requested_at: DateTime<Utc>,
}

/// Request to enroll in a course.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEnrollmentRequest {
    pub course: String,
}
