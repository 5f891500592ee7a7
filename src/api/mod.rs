// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Campus Services

//! HTTP surface of the three campus services.
//!
//! Each service builds its own router over the same shared layer stack:
//! request-id generation and propagation, HTTP tracing, the pass-through
//! security context interceptor, and the authorization gate. The token
//! layer is identical everywhere, so a token issued by the auth service
//! is honored by the intranet and enrollment services without callbacks.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{authorization_gate, security_context},
    models::{
        AcademicRecord, AccountSummary, AuthResponse, CreateEnrollmentRequest,
        CreateRecordRequest, Enrollment, LoginRequest, RegisterRequest, RegisterResponse,
    },
    state::AppState,
};

pub mod auth;
pub mod enrollments;
pub mod health;
pub mod records;
pub mod users;

/// Wrap a service's versioned routes with health endpoints, Swagger UI,
/// and the shared security layer stack.
///
/// Layer order matters: axum runs outermost-last, so the security
/// context interceptor sees the request before the authorization gate,
/// and request ids exist before tracing spans are opened.
fn service_router(
    state: AppState,
    v1_routes: Router<AppState>,
    openapi: utoipa::openapi::OpenApi,
) -> Router {
    Router::new()
        .nest("/v1", v1_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state.clone())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", openapi))
        .layer(from_fn_with_state(state.clone(), authorization_gate))
        .layer(from_fn_with_state(state, security_context))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

/// Router for the auth service (login, registration, identity, accounts).
pub fn auth_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/users/me", get(users::get_current_user))
        .route("/users", get(users::list_accounts));

    service_router(state, v1_routes, AuthApiDoc::openapi())
}

/// Router for the intranet service (academic records).
pub fn intranet_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route(
            "/records",
            get(records::list_own_records).post(records::create_record),
        )
        .route("/records/{student}", get(records::list_student_records))
        .route("/users/me", get(users::get_current_user));

    service_router(state, v1_routes, IntranetApiDoc::openapi())
}

/// Router for the enrollment service.
pub fn enrollment_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route(
            "/enrollments",
            get(enrollments::list_own_enrollments).post(enrollments::create_enrollment),
        )
        .route("/users/me", get(users::get_current_user));

    service_router(state, v1_routes, EnrollmentApiDoc::openapi())
}

/// Registers the bearer scheme referenced by `security(("bearer_token" = []))`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::register,
        users::get_current_user,
        users::list_accounts,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            LoginRequest,
            AuthResponse,
            RegisterRequest,
            RegisterResponse,
            AccountSummary,
            users::UserMeResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Login and registration"),
        (name = "Users", description = "Identity and account administration"),
        (name = "Health", description = "Service health")
    )
)]
struct AuthApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        records::list_own_records,
        records::list_student_records,
        records::create_record,
        users::get_current_user,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(schemas(AcademicRecord, CreateRecordRequest, users::UserMeResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Records", description = "Academic records"),
        (name = "Users", description = "Identity"),
        (name = "Health", description = "Service health")
    )
)]
struct IntranetApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        enrollments::list_own_enrollments,
        enrollments::create_enrollment,
        users::get_current_user,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(schemas(Enrollment, CreateEnrollmentRequest, users::UserMeResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Enrollments", description = "Course enrollment requests"),
        (name = "Users", description = "Identity"),
        (name = "Health", description = "Service health")
    )
)]
struct EnrollmentApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{PublicPaths, Role};
    use crate::password;
    use crate::token::TokenConfig;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    fn shared_config() -> TokenConfig {
        TokenConfig::new("shared-campus-secret", 86_400_000)
    }

    fn auth_state() -> AppState {
        AppState::new(
            &shared_config(),
            PublicPaths::standard()
                .also("/v1/auth/login")
                .also("/v1/auth/register"),
        )
    }

    async fn login_token(app: &Router, identifier: &str, password: &str) -> String {
        let body = serde_json::json!({ "identifier": identifier, "password": password });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/v1/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn routers_build_with_all_routes() {
        let _ = auth_router(auth_state()).into_make_service();
        let _ = intranet_router(AppState::default()).into_make_service();
        let _ = enrollment_router(AppState::default()).into_make_service();
    }

    #[tokio::test]
    async fn health_is_public_without_a_token() {
        let app = enrollment_router(AppState::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_routes_reject_anonymous_callers() {
        let app = intranet_router(AppState::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn preflight_requests_pass_the_gate() {
        let app = intranet_router(AppState::default());
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/v1/records")
                    .header(header::ORIGIN, "https://intranet.campus.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_from_auth_service_is_honored_across_services() {
        // Same secret on both sides, as deployed.
        let auth_app = auth_router(auth_state());
        let body = serde_json::json!({
            "username": "alumno.demo",
            "email": "alumno.demo@campus.example",
            "password": "a-long-password"
        });
        let response = auth_app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/v1/auth/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let token = login_token(&auth_app, "alumno.demo", "a-long-password").await;

        let enrollment_app = enrollment_router(AppState::new(
            &shared_config(),
            PublicPaths::standard(),
        ));
        let response = enrollment_app
            .oneshot(
                Request::builder()
                    .uri("/v1/enrollments")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn token_from_a_different_secret_is_rejected() {
        let foreign = AppState::new(
            &TokenConfig::new("some-other-deployment", 86_400_000),
            PublicPaths::standard(),
        );
        let token = foreign
            .issuer
            .issue("alumno.demo", Role::Student)
            .unwrap();

        let app = enrollment_router(AppState::new(
            &shared_config(),
            PublicPaths::standard(),
        ));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/enrollments")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_administrators_cannot_list_accounts() {
        let state = auth_state();
        {
            let mut store = state.store.write().await;
            store
                .insert_account(
                    "alumno.demo",
                    "alumno.demo@campus.example",
                    password::hash("a-long-password").unwrap(),
                    Role::Student,
                )
                .unwrap();
            store
                .insert_account(
                    "admin.demo",
                    "admin.demo@campus.example",
                    password::hash("another-long-password").unwrap(),
                    Role::Administrator,
                )
                .unwrap();
        }
        let app = auth_router(state);

        let student_token = login_token(&app, "alumno.demo", "a-long-password").await;
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/users")
                    .header(header::AUTHORIZATION, format!("Bearer {student_token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let admin_token = login_token(&app, "admin.demo", "another-long-password").await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/users")
                    .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
