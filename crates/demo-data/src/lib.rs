//! Deterministic demo account data for the billbook demo environment.
//!
//! This crate provides the well-known demo accounts (one per dashboard
//! family) plus reproducible generation of filler client accounts from a
//! named seed. It is deliberately independent of backend domain types to
//! avoid circular dependencies; the backend maps these seed records into
//! its own entities.
//!
//! # Example
//!
//! ```
//! use demo_data::{demo_accounts, generate_client_accounts, DEMO_PASSWORD};
//!
//! let fixed = demo_accounts();
//! assert!(fixed.iter().any(|a| a.email == "superadmin@billbook.example"));
//! assert_eq!(DEMO_PASSWORD, "password");
//!
//! let clients = generate_client_accounts("amber-ledger", 4).expect("generation succeeds");
//! assert_eq!(clients.len(), 4);
//! ```

mod accounts;
mod error;
mod generator;

pub use accounts::{AccountRole, DemoAccount, PlanSeed, DEMO_PASSWORD, demo_accounts};
pub use error::GenerationError;
pub use generator::{GeneratedAccount, MAX_CLIENT_ACCOUNTS, generate_client_accounts};
