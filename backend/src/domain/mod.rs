//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed domain entities used by the HTTP adapter
//! and the in-memory stores. Keep types transport-agnostic and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.

pub mod access;
pub mod admin;
pub mod affiliate;
pub mod auth;
pub mod billing;
pub mod error;
pub mod notification;
pub mod ports;
pub mod sales;
pub mod subscription;
pub mod user;

pub use self::access::{Access, Portal, Role};
pub use self::error::{Error, ErrorCode};
pub use self::user::{EmailAddress, User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
