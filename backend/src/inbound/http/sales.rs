//! Sales handlers: offers and the lead pipeline.
//!
//! The `/sales` scope shares the sales portal allow-list, so the super
//! admin can work the pipeline too.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use uuid::Uuid;

use crate::domain::notification::{NotificationDraft, Severity};
use crate::domain::sales::{LeadDraft, LeadPatch, Offer, OfferDraft, OfferPatch, SalesLead};
use crate::domain::{Error, Portal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// List promotional offers.
#[utoipa::path(
    get,
    path = "/api/v1/sales/offers",
    responses(
        (status = 200, description = "Offers", body = [Offer]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["sales"],
    operation_id = "listOffers"
)]
#[get("/sales/offers")]
pub async fn list_offers(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Offer>>> {
    session
        .require_role(state.users.as_ref(), Portal::Sales.allowed_roles())
        .await?;
    Ok(web::Json(state.offers.list().await?))
}

/// Create an offer; usage starts at zero and the creator is stamped.
#[utoipa::path(
    post,
    path = "/api/v1/sales/offers",
    request_body = OfferDraft,
    responses(
        (status = 201, description = "Created offer", body = Offer),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["sales"],
    operation_id = "createOffer"
)]
#[post("/sales/offers")]
pub async fn create_offer(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<OfferDraft>,
) -> ApiResult<HttpResponse> {
    let caller = session
        .require_role(state.users.as_ref(), Portal::Sales.allowed_roles())
        .await?;
    let offer = state.offers.create(payload.into_inner(), caller.id).await?;
    state
        .notifications
        .push(
            caller.id,
            NotificationDraft::new(
                "Offer created",
                format!("Offer {} is now live.", offer.code),
                Severity::Success,
            ),
        )
        .await?;
    Ok(HttpResponse::Created().json(offer))
}

/// Patch an offer. Last write wins.
#[utoipa::path(
    patch,
    path = "/api/v1/sales/offers/{id}",
    params(("id" = Uuid, Path, description = "Offer id")),
    request_body = OfferPatch,
    responses(
        (status = 200, description = "Updated offer", body = Offer),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No such offer", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["sales"],
    operation_id = "updateOffer"
)]
#[patch("/sales/offers/{id}")]
pub async fn update_offer(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<OfferPatch>,
) -> ApiResult<web::Json<Offer>> {
    session
        .require_role(state.users.as_ref(), Portal::Sales.allowed_roles())
        .await?;
    let offer = state
        .offers
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(offer))
}

/// Delete an offer.
#[utoipa::path(
    delete,
    path = "/api/v1/sales/offers/{id}",
    params(("id" = Uuid, Path, description = "Offer id")),
    responses(
        (status = 204, description = "Offer removed"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No such offer", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["sales"],
    operation_id = "deleteOffer"
)]
#[delete("/sales/offers/{id}")]
pub async fn delete_offer(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session
        .require_role(state.users.as_ref(), Portal::Sales.allowed_roles())
        .await?;
    state.offers.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List the lead pipeline.
#[utoipa::path(
    get,
    path = "/api/v1/sales/leads",
    responses(
        (status = 200, description = "Leads", body = [SalesLead]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["sales"],
    operation_id = "listLeads"
)]
#[get("/sales/leads")]
pub async fn list_leads(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<SalesLead>>> {
    session
        .require_role(state.users.as_ref(), Portal::Sales.allowed_roles())
        .await?;
    Ok(web::Json(state.leads.list().await?))
}

/// Add a lead to the pipeline.
#[utoipa::path(
    post,
    path = "/api/v1/sales/leads",
    request_body = LeadDraft,
    responses(
        (status = 201, description = "Created lead", body = SalesLead),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["sales"],
    operation_id = "createLead"
)]
#[post("/sales/leads")]
pub async fn create_lead(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<LeadDraft>,
) -> ApiResult<HttpResponse> {
    session
        .require_role(state.users.as_ref(), Portal::Sales.allowed_roles())
        .await?;
    let lead = state.leads.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(lead))
}

/// Patch a lead, bumping its update timestamp.
#[utoipa::path(
    patch,
    path = "/api/v1/sales/leads/{id}",
    params(("id" = Uuid, Path, description = "Lead id")),
    request_body = LeadPatch,
    responses(
        (status = 200, description = "Updated lead", body = SalesLead),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No such lead", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["sales"],
    operation_id = "updateLead"
)]
#[patch("/sales/leads/{id}")]
pub async fn update_lead(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<LeadPatch>,
) -> ApiResult<web::Json<SalesLead>> {
    session
        .require_role(state.users.as_ref(), Portal::Sales.allowed_roles())
        .await?;
    let lead = state
        .leads
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(lead))
}
