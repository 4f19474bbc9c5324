//! Dashboard shell and auth page guards.
//!
//! These routes mirror a browser's navigation surface: a guarded dashboard
//! subtree per portal and public-only auth pages. The pure decision lives
//! in [`crate::domain::access`]; this adapter only translates it into a
//! `200` render or a `303 See Other` redirect.

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::access::{self, Access, Portal};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Rendered dashboard shell descriptor.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    pub portal: Portal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub user: String,
}

/// Rendered public auth page descriptor.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthPageView {
    pub page: &'static str,
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

async fn render_dashboard(
    session: &SessionContext,
    state: &HttpState,
    slug: &str,
    section: Option<String>,
) -> ApiResult<HttpResponse> {
    // Unknown subtrees behave like the router's catch-all: back to the
    // landing page.
    let Some(portal) = Portal::from_slug(slug) else {
        return Ok(see_other("/"));
    };
    let user = session.current_user(state.users.as_ref()).await?;
    match access::protected(user.as_ref().map(|user| user.role), portal) {
        Access::Grant => {
            let user = user.map(|user| user.name).unwrap_or_default();
            Ok(HttpResponse::Ok().json(ShellView {
                portal,
                section,
                user,
            }))
        }
        decision => Ok(see_other(decision.redirect_path().unwrap_or("/"))),
    }
}

/// Portal dashboard root, guarded by the portal's allow-list.
#[utoipa::path(
    get,
    path = "/dashboard/{portal}",
    params(("portal" = String, Path, description = "Portal slug, e.g. `sales`")),
    responses(
        (status = 200, description = "Shell rendered", body = ShellView),
        (status = 303, description = "Redirect to login or the caller's own portal")
    ),
    tags = ["shell"],
    operation_id = "dashboardRoot"
)]
#[get("/dashboard/{portal}")]
pub async fn dashboard_root(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    render_dashboard(&session, &state, &path.into_inner(), None).await
}

/// Portal dashboard section; the whole subtree shares one guard.
#[utoipa::path(
    get,
    path = "/dashboard/{portal}/{section}",
    params(
        ("portal" = String, Path, description = "Portal slug"),
        ("section" = String, Path, description = "Section path within the portal")
    ),
    responses(
        (status = 200, description = "Shell rendered", body = ShellView),
        (status = 303, description = "Redirect to login or the caller's own portal")
    ),
    tags = ["shell"],
    operation_id = "dashboardSection"
)]
#[get("/dashboard/{portal}/{section:.*}")]
pub async fn dashboard_section(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (slug, section) = path.into_inner();
    render_dashboard(&session, &state, &slug, Some(section)).await
}

async fn render_public_page(
    session: &SessionContext,
    state: &HttpState,
    page: &'static str,
) -> ApiResult<HttpResponse> {
    let user = session.current_user(state.users.as_ref()).await?;
    match access::public_only(user.map(|user| user.role)) {
        Access::Grant => Ok(HttpResponse::Ok().json(AuthPageView { page })),
        decision => Ok(see_other(decision.redirect_path().unwrap_or("/"))),
    }
}

/// Login page; redirects authenticated callers to their dashboard.
#[utoipa::path(
    get,
    path = "/auth/login",
    responses(
        (status = 200, description = "Page rendered", body = AuthPageView),
        (status = 303, description = "Already authenticated; redirect home")
    ),
    tags = ["shell"],
    operation_id = "loginPage",
    security([])
)]
#[get("/auth/login")]
pub async fn login_page(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    render_public_page(&session, &state, "login").await
}

/// Signup page; redirects authenticated callers to their dashboard.
#[utoipa::path(
    get,
    path = "/auth/signup",
    responses(
        (status = 200, description = "Page rendered", body = AuthPageView),
        (status = 303, description = "Already authenticated; redirect home")
    ),
    tags = ["shell"],
    operation_id = "signupPage",
    security([])
)]
#[get("/auth/signup")]
pub async fn signup_page(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    render_public_page(&session, &state, "signup").await
}

/// Forgot-password page; same public-only guard as the other auth pages.
#[utoipa::path(
    get,
    path = "/auth/forgot-password",
    responses(
        (status = 200, description = "Page rendered", body = AuthPageView),
        (status = 303, description = "Already authenticated; redirect home")
    ),
    tags = ["shell"],
    operation_id = "forgotPasswordPage",
    security([])
)]
#[get("/auth/forgot-password")]
pub async fn forgot_password_page(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    render_public_page(&session, &state, "forgot-password").await
}

/// Landing root, the redirect target for unknown subtrees.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service descriptor")),
    tags = ["shell"],
    operation_id = "landing",
    security([])
)]
#[get("/")]
pub async fn landing() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "billbook",
        "docs": "/docs",
    }))
}
