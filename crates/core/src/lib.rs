//! `trustbank-core` — account ledger domain.
//!
//! This crate contains the account model and the in-memory registry that owns
//! every account. It knows nothing about HTTP or authentication.

pub mod account;
pub mod amount;
pub mod error;
pub mod id;
pub mod registry;

pub use account::Account;
pub use amount::Amount;
pub use error::{LedgerError, LedgerResult};
pub use id::AccountNumber;
pub use registry::Registry;
