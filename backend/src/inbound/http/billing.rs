//! Client billing handlers: invoices and inventory products.

use actix_web::{HttpResponse, get, post, web};

use crate::domain::billing::{Invoice, InvoiceDraft, Product, ProductDraft};
use crate::domain::notification::{NotificationDraft, Severity};
use crate::domain::{Error, Portal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// List the caller's invoices.
#[utoipa::path(
    get,
    path = "/api/v1/billing/invoices",
    responses(
        (status = 200, description = "Invoices", body = [Invoice]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["billing"],
    operation_id = "listInvoices"
)]
#[get("/billing/invoices")]
pub async fn list_invoices(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Invoice>>> {
    session
        .require_role(state.users.as_ref(), Portal::Client.allowed_roles())
        .await?;
    Ok(web::Json(state.invoices.list().await?))
}

/// Raise a new invoice.
#[utoipa::path(
    post,
    path = "/api/v1/billing/invoices",
    request_body = InvoiceDraft,
    responses(
        (status = 201, description = "Created invoice", body = Invoice),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["billing"],
    operation_id = "createInvoice"
)]
#[post("/billing/invoices")]
pub async fn create_invoice(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<InvoiceDraft>,
) -> ApiResult<HttpResponse> {
    let caller = session
        .require_role(state.users.as_ref(), Portal::Client.allowed_roles())
        .await?;
    let invoice = state.invoices.create(payload.into_inner()).await?;
    state
        .notifications
        .push(
            caller.id,
            NotificationDraft::new(
                "Invoice raised",
                format!(
                    "Invoice {} for {} was created.",
                    invoice.invoice_number, invoice.client_name
                ),
                Severity::Success,
            ),
        )
        .await?;
    Ok(HttpResponse::Created().json(invoice))
}

/// List the caller's products.
#[utoipa::path(
    get,
    path = "/api/v1/billing/products",
    responses(
        (status = 200, description = "Products", body = [Product]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["billing"],
    operation_id = "listProducts"
)]
#[get("/billing/products")]
pub async fn list_products(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Product>>> {
    session
        .require_role(state.users.as_ref(), Portal::Client.allowed_roles())
        .await?;
    Ok(web::Json(state.products.list().await?))
}

/// Add a product to the inventory.
#[utoipa::path(
    post,
    path = "/api/v1/billing/products",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "Created product", body = Product),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["billing"],
    operation_id = "createProduct"
)]
#[post("/billing/products")]
pub async fn create_product(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<ProductDraft>,
) -> ApiResult<HttpResponse> {
    session
        .require_role(state.users.as_ref(), Portal::Client.allowed_roles())
        .await?;
    let product = state.products.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(product))
}
