//! Administration handlers: user management, role definitions, statistics.
//!
//! The whole `/admin` scope shares the super-admin allow-list; statistics
//! are additionally readable by the sales admin, matching the dashboards
//! that render them.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::admin::{DashboardStats, RoleDefinition, RoleDraft, RolePatch};
use crate::domain::user::UserStatus;
use crate::domain::{Error, Portal, Role, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Roles permitted to read dashboard statistics.
const STATS_ROLES: [Role; 2] = [Role::SuperAdmin, Role::SalesAdmin];

/// Status change body for `PATCH /api/v1/admin/users/{id}/status`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub status: UserStatus,
}

/// List every account in the directory.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    responses(
        (status = 200, description = "Accounts", body = [User]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listUsers"
)]
#[get("/admin/users")]
pub async fn list_users(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<User>>> {
    session
        .require_role(state.users.as_ref(), Portal::SuperAdmin.allowed_roles())
        .await?;
    Ok(web::Json(state.users.list().await?))
}

/// Change an account's lifecycle status.
#[utoipa::path(
    patch,
    path = "/api/v1/admin/users/{id}/status",
    params(("id" = Uuid, Path, description = "Account id")),
    request_body = StatusChange,
    responses(
        (status = 200, description = "Updated account", body = User),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No such account", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "updateUserStatus"
)]
#[patch("/admin/users/{id}/status")]
pub async fn update_user_status(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<StatusChange>,
) -> ApiResult<web::Json<User>> {
    session
        .require_role(state.users.as_ref(), Portal::SuperAdmin.allowed_roles())
        .await?;
    let user = state
        .users
        .update_status(UserId::new(id.into_inner()), payload.into_inner().status)
        .await?;
    Ok(web::Json(user))
}

/// List assignable role definitions.
#[utoipa::path(
    get,
    path = "/api/v1/admin/roles",
    responses(
        (status = 200, description = "Role definitions", body = [RoleDefinition]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listRoles"
)]
#[get("/admin/roles")]
pub async fn list_roles(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<RoleDefinition>>> {
    session
        .require_role(state.users.as_ref(), Portal::SuperAdmin.allowed_roles())
        .await?;
    Ok(web::Json(state.roles.list().await?))
}

/// Create a custom role definition.
#[utoipa::path(
    post,
    path = "/api/v1/admin/roles",
    request_body = RoleDraft,
    responses(
        (status = 201, description = "Created definition", body = RoleDefinition),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "createRole"
)]
#[post("/admin/roles")]
pub async fn create_role(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<RoleDraft>,
) -> ApiResult<HttpResponse> {
    session
        .require_role(state.users.as_ref(), Portal::SuperAdmin.allowed_roles())
        .await?;
    let definition = state.roles.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(definition))
}

/// Update a role definition.
#[utoipa::path(
    patch,
    path = "/api/v1/admin/roles/{id}",
    params(("id" = Uuid, Path, description = "Definition id")),
    request_body = RolePatch,
    responses(
        (status = 200, description = "Updated definition", body = RoleDefinition),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No such definition", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "updateRole"
)]
#[patch("/admin/roles/{id}")]
pub async fn update_role(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<RolePatch>,
) -> ApiResult<web::Json<RoleDefinition>> {
    session
        .require_role(state.users.as_ref(), Portal::SuperAdmin.allowed_roles())
        .await?;
    let definition = state
        .roles
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(definition))
}

/// Delete a custom role definition; system definitions refuse.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/roles/{id}",
    params(("id" = Uuid, Path, description = "Definition id")),
    responses(
        (status = 204, description = "Definition removed"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden or system definition", body = Error),
        (status = 404, description = "No such definition", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "deleteRole"
)]
#[delete("/admin/roles/{id}")]
pub async fn delete_role(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session
        .require_role(state.users.as_ref(), Portal::SuperAdmin.allowed_roles())
        .await?;
    state.roles.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Headline statistics for the admin dashboards.
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    responses(
        (status = 200, description = "Platform statistics", body = DashboardStats),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "dashboardStats"
)]
#[get("/admin/stats")]
pub async fn dashboard_stats(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DashboardStats>> {
    session.require_role(state.users.as_ref(), &STATS_ROLES).await?;
    Ok(web::Json(state.stats.dashboard_stats().await?))
}
