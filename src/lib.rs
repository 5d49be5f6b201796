//! Hedera account walkthrough library.

pub mod config;
pub mod error;
pub mod ledger;
pub mod lifecycle;
pub mod observability;
pub mod walkthrough;

pub use config::schema::WalkthroughConfig;
pub use error::{AppError, AppResult};
pub use ledger::{HederaClient, LedgerClient};
pub use walkthrough::{WalkthroughReport, WalkthroughSettings};
