//! Plan catalogue and subscription handlers.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::Error;
use crate::domain::notification::{NotificationDraft, Severity};
use crate::domain::subscription::{BillingCycle, PlanDetails, PlanTier};
use crate::domain::user::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Subscribe request body for `POST /api/v1/subscription`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub plan: PlanTier,
    pub billing_cycle: BillingCycle,
}

/// The public plan catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/plans",
    responses(
        (status = 200, description = "Purchasable plans", body = [PlanDetails]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["subscriptions"],
    operation_id = "listPlans",
    security([])
)]
#[get("/plans")]
pub async fn list_plans(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PlanDetails>>> {
    Ok(web::Json(state.subscriptions.plans().await?))
}

/// Subscribe the caller to a plan; any authenticated role may subscribe.
///
/// The composed subscription replaces whatever the account carried
/// before. Last write wins.
#[utoipa::path(
    post,
    path = "/api/v1/subscription",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Account with the new subscription", body = User),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Unknown plan tier", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["subscriptions"],
    operation_id = "subscribe"
)]
#[post("/subscription")]
pub async fn subscribe(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<SubscribeRequest>,
) -> ApiResult<web::Json<User>> {
    let id = session.require_user_id()?;
    let payload = payload.into_inner();
    let subscription = state
        .subscriptions
        .subscribe(payload.plan, payload.billing_cycle)
        .await?;
    let user = state.users.attach_subscription(id, subscription).await?;
    state
        .notifications
        .push(
            id,
            NotificationDraft::new(
                "Subscription activated",
                "Your plan is active. Happy invoicing!",
                Severity::Success,
            ),
        )
        .await?;
    Ok(web::Json(user))
}
