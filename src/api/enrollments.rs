// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! Enrollment endpoints (enrollment service).
//!
//! Enrollment requests are filed by students and applicants for
//! themselves; the token subject is the enrolled student, never a
//! client-supplied field.

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::{Auth, Role, VerifiedIdentity};
use crate::error::ApiError;
use crate::models::{CreateEnrollmentRequest, Enrollment};
use crate::state::AppState;

fn can_enroll(identity: &VerifiedIdentity) -> bool {
    identity.has_role(Role::Student) || identity.has_role(Role::Applicant)
}

/// List the caller's enrollment requests.
#[utoipa::path(
    get,
    path = "/v1/enrollments",
    tag = "Enrollments",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The caller's enrollment requests", body = [Enrollment]),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_own_enrollments(
    Auth(identity): Auth,
    State(state): State<AppState>,
) -> Json<Vec<Enrollment>> {
    let store = state.store.read().await;
    Json(store.enrollments_for(&identity.subject))
}

/// File an enrollment request for the caller.
#[utoipa::path(
    post,
    path = "/v1/enrollments",
    request_body = CreateEnrollmentRequest,
    tag = "Enrollments",
    security(("bearer_token" = [])),
    responses(
        (status = 201, description = "Enrollment request filed", body = Enrollment),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller may not enroll"),
        (status = 409, description = "A request for this course is already pending")
    )
)]
pub async fn create_enrollment(
    Auth(identity): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateEnrollmentRequest>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    if !can_enroll(&identity) {
        tracing::warn!(
            subject = %identity.subject,
            role = %identity.role,
            "enrollment denied"
        );
        return Err(ApiError::forbidden(
            "Only students and applicants may file enrollment requests",
        ));
    }

    if request.course.trim().is_empty() {
        return Err(ApiError::bad_request("Course code must not be empty"));
    }

    let enrollment = {
        let mut store = state.store.write().await;
        store.insert_enrollment(identity.subject.clone(), request.course)?
    };

    tracing::info!(
        subject = %identity.subject,
        course = %enrollment.course,
        "enrollment request filed"
    );

    Ok((StatusCode::CREATED, Json(enrollment)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Claims;

    fn identity(subject: &str, role: Role) -> VerifiedIdentity {
        VerifiedIdentity::from_claims(
            Claims {
                sub: subject.to_string(),
                role,
                iat: 0,
                exp: i64::MAX,
            },
            None,
        )
    }

    #[test]
    fn only_students_and_applicants_enroll() {
        assert!(can_enroll(&identity("s", Role::Student)));
        assert!(can_enroll(&identity("p", Role::Applicant)));
        assert!(can_enroll(&identity("a", Role::Administrator)));
        assert!(!can_enroll(&identity("d", Role::Instructor)));
        assert!(!can_enroll(&identity("c", Role::Coordinator)));
    }

    #[tokio::test]
    async fn enrollment_is_scoped_to_the_token_subject() {
        let state = AppState::default();

        let (status, Json(enrollment)) = create_enrollment(
            Auth(identity("alumno.demo", Role::Student)),
            State(state.clone()),
            Json(CreateEnrollmentRequest {
                course: "FIS-201".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(enrollment.student, "alumno.demo");
        assert_eq!(enrollment.status, "pending");

        let Json(own) = list_own_enrollments(
            Auth(identity("alumno.demo", Role::Student)),
            State(state.clone()),
        )
        .await;
        assert_eq!(own, vec![enrollment]);

        let Json(other) = list_own_enrollments(
            Auth(identity("otra.alumna", Role::Student)),
            State(state),
        )
        .await;
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn duplicate_pending_request_conflicts() {
        let state = AppState::default();
        let request = || {
            Json(CreateEnrollmentRequest {
                course: "FIS-201".to_string(),
            })
        };

        create_enrollment(
            Auth(identity("alumno.demo", Role::Student)),
            State(state.clone()),
            request(),
        )
        .await
        .unwrap();

        let err = create_enrollment(
            Auth(identity("alumno.demo", Role::Student)),
            State(state),
            request(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn instructor_cannot_enroll() {
        let state = AppState::default();
        let err = create_enrollment(
            Auth(identity("docente.demo", Role::Instructor)),
            State(state),
            Json(CreateEnrollmentRequest {
                course: "FIS-201".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }
}
