//! Billbook backend library.
//!
//! A multi-role billing/invoicing platform backend: session identity,
//! role-guarded dashboards, and in-memory demo stores behind hexagonal
//! ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
