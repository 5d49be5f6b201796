//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Read credentials → Build ledger client
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then credentials, then the network client
//! - Fail fast: any startup error is fatal and happens before network traffic

pub mod startup;

pub use startup::{connect, connect_from_env};
