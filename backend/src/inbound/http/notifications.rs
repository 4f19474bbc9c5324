//! Notification feed handlers.
//!
//! Every authenticated role has a feed; the store caps each feed at fifty
//! entries and evicts the oldest beyond that.

use actix_web::{HttpResponse, delete, get, post, web};
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::notification::Notification;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// The caller's notification feed, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Feed entries", body = [Notification]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("/notifications")]
pub async fn list_notifications(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Notification>>> {
    let id = session.require_user_id()?;
    Ok(web::Json(state.notifications.list(id).await?))
}

/// Mark one notification read. Safe to repeat.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = Uuid, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Marked read"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not in the caller's feed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "markNotificationRead"
)]
#[post("/notifications/{id}/read")]
pub async fn mark_notification_read(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    state.notifications.mark_read(user, id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Clear the caller's feed.
#[utoipa::path(
    delete,
    path = "/api/v1/notifications",
    responses(
        (status = 204, description = "Feed cleared"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "clearNotifications"
)]
#[delete("/notifications")]
pub async fn clear_notifications(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let user = session.require_user_id()?;
    state.notifications.clear(user).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::auth::{LoginRequest, SignupBody};
    use crate::inbound::http::test_utils::{seeded_state, session_cookie, test_app};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;

    async fn login_client(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> Cookie<'static> {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&LoginRequest {
                    email: "client@billbook.example".into(),
                    password: "password".into(),
                })
                .to_request(),
        )
        .await;
        session_cookie(&res)
    }

    #[actix_web::test]
    async fn feeds_start_empty_for_seeded_accounts() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        let cookie = login_client(&app).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/notifications")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let feed: Value = actix_test::read_body_json(res).await;
        assert!(feed.as_array().expect("feed array").is_empty());
    }

    #[actix_web::test]
    async fn feed_access_requires_a_session() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        for request in [
            actix_test::TestRequest::get().uri("/api/v1/notifications"),
            actix_test::TestRequest::delete().uri("/api/v1/notifications"),
            actix_test::TestRequest::post()
                .uri(&format!("/api/v1/notifications/{}/read", Uuid::new_v4())),
        ] {
            let res = actix_test::call_service(&app, request.to_request()).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn mark_read_is_idempotent_over_http() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        // Signup produces a welcome notification to work with.
        let signup = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/signup")
                .set_json(&SignupBody {
                    name: "Feed Owner".into(),
                    email: "feed@example.com".into(),
                    password: "pw".into(),
                    company_name: None,
                    phone: None,
                    role: None,
                    referral_code: None,
                })
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&signup);

        let feed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/notifications")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        let feed: Value = actix_test::read_body_json(feed).await;
        let id = feed[0]["id"].as_str().expect("id string").to_owned();

        for _ in 0..2 {
            let res = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri(&format!("/api/v1/notifications/{id}/read"))
                    .cookie(cookie.clone())
                    .to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::NO_CONTENT);
        }

        let feed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/notifications")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let feed: Value = actix_test::read_body_json(feed).await;
        assert_eq!(feed[0]["read"], true);
    }

    #[actix_web::test]
    async fn marking_a_strangers_notification_is_not_found() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        let cookie = login_client(&app).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/v1/notifications/{}/read", Uuid::new_v4()))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn clearing_empties_the_feed() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        let signup = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/signup")
                .set_json(&SignupBody {
                    name: "Feed Owner".into(),
                    email: "feed@example.com".into(),
                    password: "pw".into(),
                    company_name: None,
                    phone: None,
                    role: None,
                    referral_code: None,
                })
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&signup);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/v1/notifications")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let feed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/notifications")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let feed: Value = actix_test::read_body_json(feed).await;
        assert!(feed.as_array().expect("feed array").is_empty());
    }
}
