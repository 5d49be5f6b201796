//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!
//! Consumers:
//!     → stderr (pretty for humans, JSON for collectors)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr; stdout carries only the walkthrough's status lines
//! - Each walkthrough run is wrapped in a span carrying its run ID

pub mod logging;

pub use logging::init_logging;
