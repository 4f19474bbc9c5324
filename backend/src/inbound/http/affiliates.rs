//! Affiliate programme handlers.
//!
//! The `/affiliate` scope is shared by the manufacturer, distributor, and
//! affiliate roles; each caller only ever sees their own records.

use actix_web::{get, web};

use crate::domain::affiliate::{Affiliate, ReferralTransaction};
use crate::domain::{Error, Portal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// The caller's affiliate record.
#[utoipa::path(
    get,
    path = "/api/v1/affiliate/summary",
    responses(
        (status = 200, description = "Affiliate record", body = Affiliate),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Caller is not enrolled", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["affiliate"],
    operation_id = "affiliateSummary"
)]
#[get("/affiliate/summary")]
pub async fn affiliate_summary(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Affiliate>> {
    let caller = session
        .require_role(state.users.as_ref(), Portal::Affiliate.allowed_roles())
        .await?;
    let summary = state
        .affiliates
        .summary(caller.id)
        .await?
        .ok_or_else(|| Error::not_found("not enrolled in the affiliate programme"))?;
    Ok(web::Json(summary))
}

/// The caller's referral transactions.
#[utoipa::path(
    get,
    path = "/api/v1/affiliate/referrals",
    responses(
        (status = 200, description = "Referral transactions", body = [ReferralTransaction]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["affiliate"],
    operation_id = "affiliateReferrals"
)]
#[get("/affiliate/referrals")]
pub async fn affiliate_referrals(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ReferralTransaction>>> {
    let caller = session
        .require_role(state.users.as_ref(), Portal::Affiliate.allowed_roles())
        .await?;
    Ok(web::Json(state.affiliates.referrals(caller.id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::auth::LoginRequest;
    use crate::inbound::http::test_utils::{seeded_state, session_cookie, test_app};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    async fn login(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        email: &str,
    ) -> Cookie<'static> {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(&LoginRequest {
                    email: email.into(),
                    password: "password".into(),
                })
                .to_request(),
        )
        .await;
        assert!(res.status().is_success(), "login failed for {email}");
        session_cookie(&res)
    }

    #[rstest]
    #[case("manufacturer@billbook.example", "MANU2024", 10)]
    #[case("distributor@billbook.example", "DIST2024", 15)]
    #[actix_web::test]
    async fn summary_returns_the_callers_own_programme(
        #[case] email: &str,
        #[case] code: &str,
        #[case] commission: i64,
    ) {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        let cookie = login(&app, email).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/affiliate/summary")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], code);
        assert_eq!(body["commissionPercent"], commission);
    }

    #[actix_web::test]
    async fn clients_are_forbidden_from_the_affiliate_scope() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        let cookie = login(&app, "client@billbook.example").await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/affiliate/summary")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn referral_ledger_starts_empty() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        let cookie = login(&app, "manufacturer@billbook.example").await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/affiliate/referrals")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert!(body.as_array().expect("referral array").is_empty());
    }
}
