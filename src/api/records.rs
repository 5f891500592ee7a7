// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Academic record endpoints (intranet service).
//!
//! Access rules: students read their own records; instructors and
//! coordinators read any student's records and may record grades.
//! Administrators pass every check.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::{Auth, Role, VerifiedIdentity};
use crate::error::ApiError;
use crate::models::{AcademicRecord, CreateRecordRequest};
use crate::state::AppState;

fn can_read_records_of(identity: &VerifiedIdentity, student: &str) -> bool {
    identity.subject == student
        || identity.has_role(Role::Instructor)
        || identity.has_role(Role::Coordinator)
}

fn can_record_grades(identity: &VerifiedIdentity) -> bool {
    identity.has_role(Role::Instructor) || identity.has_role(Role::Coordinator)
}

/// List the caller's own academic records.
#[utoipa::path(
    get,
    path = "/v1/records",
    tag = "Records",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The caller's records", body = [AcademicRecord]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_own_records(
    Auth(identity): Auth,
    State(state): State<AppState>,
) -> Json<Vec<AcademicRecord>> {
    let store = state.store.read().await;
    Json(store.records_for(&identity.subject))
}

/// List a specific student's records.
#[utoipa::path(
    get,
    path = "/v1/records/{student}",
    tag = "Records",
    security(("bearer_token" = [])),
    params(("student" = String, Path, description = "Student username")),
    responses(
        (status = 200, description = "The student's records", body = [AcademicRecord]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller may not read this student's records")
    )
)]
pub async fn list_student_records(
    Auth(identity): Auth,
    State(state): State<AppState>,
    Path(student): Path<String>,
) -> Result<Json<Vec<AcademicRecord>>, ApiError> {
    if !can_read_records_of(&identity, &student) {
        tracing::warn!(
            subject = %identity.subject,
            role = %identity.role,
            student = %student,
            "record access denied"
        );
        return Err(ApiError::forbidden(
            "You may only read your own academic records",
        ));
    }

    let store = state.store.read().await;
    Ok(Json(store.records_for(&student)))
}

fn validate_record(request: &CreateRecordRequest) -> Result<(), ApiError> {
    let mut errors = HashMap::new();
    for (field, value) in [
        ("student", &request.student),
        ("course", &request.course),
        ("grade", &request.grade),
        ("term", &request.term),
    ] {
        if value.trim().is_empty() {
            errors.insert(field.to_string(), "must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(errors))
    }
}

/// Record a grade entry. Instructors and coordinators only.
#[utoipa::path(
    post,
    path = "/v1/records",
    request_body = CreateRecordRequest,
    tag = "Records",
    security(("bearer_token" = [])),
    responses(
        (status = 201, description = "Record created", body = AcademicRecord),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller may not record grades")
    )
)]
pub async fn create_record(
    Auth(identity): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<AcademicRecord>), ApiError> {
    if !can_record_grades(&identity) {
        tracing::warn!(
            subject = %identity.subject,
            role = %identity.role,
            "grade entry denied"
        );
        return Err(ApiError::forbidden("Only teaching staff may record grades"));
    }

    validate_record(&request)?;

    let record = {
        let mut store = state.store.write().await;
        store.insert_record(request)
    };

    tracing::info!(
        subject = %identity.subject,
        student = %record.student,
        course = %record.course,
        "grade recorded"
    );

    Ok((StatusCode::CREATED, Json(record)))
}
