//! Session identity handlers: login, signup, logout, and profile.
//!
//! ```text
//! POST /api/v1/auth/login {"email":"client@billbook.example","password":"password"}
//! POST /api/v1/auth/signup {"name":"New Business","email":"owner@example.com","password":"pw"}
//! POST /api/v1/auth/logout
//! GET  /api/v1/auth/me
//! PATCH /api/v1/auth/profile {"phone":"+91 90000 00000"}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::auth::{AuthValidationError, LoginCredentials, SignupRequest};
use crate::domain::notification::{NotificationDraft, Severity};
use crate::domain::user::UserProfileUpdate;
use crate::domain::{Error, Role, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/auth/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request body for `POST /api/v1/auth/signup`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupBody {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub referral_code: Option<String>,
}

fn map_auth_validation_error(err: AuthValidationError) -> Error {
    match err {
        AuthValidationError::Email(inner) => Error::invalid_request(inner.to_string())
            .with_details(json!({ "field": "email", "code": "invalid_email" })),
        AuthValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
        AuthValidationError::EmptyName => Error::invalid_request("name must not be empty")
            .with_details(json!({ "field": "name", "code": "empty_name" })),
    }
}

/// Authenticate against the directory and establish a session.
///
/// A failed login leaves the session untouched.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = User,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<User>> {
    let payload = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&payload.email, &payload.password)
        .map_err(map_auth_validation_error)?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(user.id)?;
    Ok(web::Json(user))
}

/// Fabricate a new account and authenticate it immediately.
///
/// No uniqueness is enforced; the role defaults to `client`.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignupBody,
    responses(
        (status = 201, description = "Account created and session established", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/auth/signup")]
pub async fn signup(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<SignupBody>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let request = SignupRequest::try_from_parts(
        &payload.name,
        &payload.email,
        &payload.password,
        payload.role,
        payload.company_name,
        payload.phone,
        payload.referral_code,
    )
    .map_err(map_auth_validation_error)?;
    let user = state.login.register(request).await?;
    session.persist_user(user.id)?;
    state
        .notifications
        .push(
            user.id,
            NotificationDraft::new(
                "Welcome to Billbook",
                "Your account is ready. Pick a plan to unlock invoicing.",
                Severity::Success,
            ),
        )
        .await?;
    Ok(HttpResponse::Created().json(user))
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Session ended"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/auth/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

/// The account behind the current session.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current account", body = User),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "currentUser"
)]
#[get("/auth/me")]
pub async fn current_user(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<User>> {
    let user = session
        .current_user(state.users.as_ref())
        .await?
        .ok_or_else(|| Error::unauthorized("login required"))?;
    Ok(web::Json(user))
}

/// Update the caller's own profile.
#[utoipa::path(
    patch,
    path = "/api/v1/auth/profile",
    request_body = UserProfileUpdate,
    responses(
        (status = 200, description = "Updated account", body = User),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "updateProfile"
)]
#[patch("/auth/profile")]
pub async fn update_profile(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<UserProfileUpdate>,
) -> ApiResult<web::Json<User>> {
    let id = session.require_user_id()?;
    let user = state.users.update_profile(id, payload.into_inner()).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{seeded_state, session_cookie, test_app};
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web};
    use rstest::rstest;
    use serde_json::Value;

    #[actix_web::test]
    async fn login_round_trips_the_demo_client() {
        let state = seeded_state().await;
        let app = actix_test::init_service(test_app(state)).await;

        let login_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&LoginRequest {
                    email: "client@billbook.example".into(),
                    password: "password".into(),
                })
                .to_request(),
        )
        .await;
        assert!(login_res.status().is_success());
        let cookie = session_cookie(&login_res);

        let me_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/auth/me")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(me_res.status().is_success());
        let body: Value = actix_test::read_body_json(me_res).await;
        assert_eq!(body["email"], "client@billbook.example");
        assert_eq!(body["role"], "client");
        assert!(body.get("companyName").is_some(), "camelCase wire form expected");
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorised_and_leaves_no_session() {
        let state = seeded_state().await;
        let app = actix_test::init_service(test_app(state)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&LoginRequest {
                    email: "client@billbook.example".into(),
                    password: "wrong".into(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "unauthorized");
        assert_eq!(body["message"], "invalid credentials");

        let me_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/auth/me")
                .to_request(),
        )
        .await;
        assert_eq!(me_res.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[case("not-an-email", "password", "email", "invalid_email")]
    #[case("client@billbook.example", "", "password", "empty_password")]
    #[actix_web::test]
    async fn login_validation_failures_carry_field_details(
        #[case] email: &str,
        #[case] password: &str,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let state = seeded_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&LoginRequest {
                    email: email.into(),
                    password: password.into(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], field);
        assert_eq!(body["details"]["code"], code);
    }

    #[actix_web::test]
    async fn signup_authenticates_immediately_and_greets() {
        let state = seeded_state().await;
        let app = actix_test::init_service(test_app(state)).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/signup")
                .set_json(&SignupBody {
                    name: "New Business".into(),
                    email: "owner@example.com".into(),
                    password: "whatever".into(),
                    company_name: Some("New Business Ltd".into()),
                    phone: None,
                    role: None,
                    referral_code: None,
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let cookie = session_cookie(&res);

        let feed_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/notifications")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(feed_res.status().is_success());
        let feed: Value = actix_test::read_body_json(feed_res).await;
        let entries = feed.as_array().expect("feed array");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["title"], "Welcome to Billbook");
        assert_eq!(entries[0]["read"], false);
    }

    #[actix_web::test]
    async fn logout_ends_the_session() {
        let state = seeded_state().await;
        let app = actix_test::init_service(test_app(state)).await;

        let login_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&LoginRequest {
                    email: "client@billbook.example".into(),
                    password: "password".into(),
                })
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&login_res);

        let logout_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/logout")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(logout_res.status(), StatusCode::NO_CONTENT);
        let cleared = session_cookie(&logout_res);

        let me_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/auth/me")
                .cookie(cleared)
                .to_request(),
        )
        .await;
        assert_eq!(me_res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn profile_patch_applies_and_bumps_updated_at() {
        let state = seeded_state().await;
        let app = actix_test::init_service(test_app(state)).await;

        let login_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&LoginRequest {
                    email: "client@billbook.example".into(),
                    password: "password".into(),
                })
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&login_res);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri("/api/v1/auth/profile")
                .cookie(cookie)
                .set_json(serde_json::json!({ "phone": "+91 90000 00000" }))
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["phone"], "+91 90000 00000");
        assert_eq!(body["name"], "Demo Client");
    }

    #[actix_web::test]
    async fn profile_patch_rejects_unknown_fields() {
        let state = seeded_state().await;
        let app = actix_test::init_service(test_app(state)).await;

        let login_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&LoginRequest {
                    email: "client@billbook.example".into(),
                    password: "password".into(),
                })
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&login_res);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri("/api/v1/auth/profile")
                .cookie(cookie)
                .set_json(serde_json::json!({ "role": "super_admin" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    // Route registration sanity: handlers must live under the /api/v1 scope.
    #[actix_web::test]
    async fn auth_routes_are_scoped_under_api_v1() {
        let state = seeded_state().await;
        let app = actix_test::init_service(
            actix_web::App::new()
                .wrap(crate::inbound::http::test_utils::test_session_middleware())
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(login)),
        )
        .await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/auth/login")
                .set_json(&LoginRequest {
                    email: "client@billbook.example".into(),
                    password: "password".into(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
