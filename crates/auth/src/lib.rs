//! `trustbank-auth` — admin capability gate.
//!
//! This crate is intentionally decoupled from HTTP and from the ledger.

pub mod authorize;

pub use authorize::{AdminSecret, AuthzError, DEFAULT_ADMIN_SECRET};
