//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, amounts in range)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WalkthroughConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::{AmountsConfig, WalkthroughConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("network.request_timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("transfer amount must be positive, got {0}")]
    NonPositiveTransfer(i64),

    #[error("walkthrough.initial_balance_tinybars must not be negative, got {0}")]
    NegativeInitialBalance(i64),

    #[error("transfer of {transfer} tinybars exceeds the new account's initial balance of {initial}")]
    TransferExceedsBalance { transfer: i64, initial: i64 },

    #[error("observability.log_filter must not be empty")]
    EmptyLogFilter,
}

pub fn validate_config(config: &WalkthroughConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.network.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let amounts = &config.walkthrough;
    if amounts.transfer_amount_tinybars <= 0 {
        errors.push(ValidationError::NonPositiveTransfer(amounts.transfer_amount_tinybars));
    }
    if amounts.initial_balance_tinybars < 0 {
        errors.push(ValidationError::NegativeInitialBalance(amounts.initial_balance_tinybars));
    }

    if config.observability.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that only apply to the full walkthrough, where the new account
/// pays the transfer out of its initial balance.
pub fn validate_walkthrough(amounts: &AmountsConfig) -> Result<(), Vec<ValidationError>> {
    if amounts.initial_balance_tinybars >= 0
        && amounts.transfer_amount_tinybars > amounts.initial_balance_tinybars
    {
        return Err(vec![ValidationError::TransferExceedsBalance {
            transfer: amounts.transfer_amount_tinybars,
            initial: amounts.initial_balance_tinybars,
        }]);
    }
    Ok(())
}

/// A standalone transfer amount must be positive.
pub fn validate_transfer_amount(amount: i64) -> Result<(), Vec<ValidationError>> {
    if amount <= 0 {
        return Err(vec![ValidationError::NonPositiveTransfer(amount)]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&WalkthroughConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = WalkthroughConfig::default();
        config.network.request_timeout_secs = 0;
        config.walkthrough.transfer_amount_tinybars = 0;
        config.observability.log_filter = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroTimeout,
                ValidationError::NonPositiveTransfer(0),
                ValidationError::EmptyLogFilter,
            ]
        );
    }

    #[test]
    fn test_transfer_exceeds_balance() {
        let mut config = WalkthroughConfig::default();
        config.walkthrough.initial_balance_tinybars = 100;
        config.walkthrough.transfer_amount_tinybars = 1000;

        // Fine for single commands, only the full walkthrough cares.
        assert!(validate_config(&config).is_ok());

        let errors = validate_walkthrough(&config.walkthrough).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TransferExceedsBalance { transfer: 1000, initial: 100 }]
        );
        assert!(errors[0].to_string().contains("1000"));
    }

    #[test]
    fn test_zero_initial_balance_is_valid() {
        let mut config = WalkthroughConfig::default();
        config.walkthrough.initial_balance_tinybars = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_transfer_amount_must_be_positive() {
        assert!(validate_transfer_amount(1).is_ok());
        assert_eq!(
            validate_transfer_amount(-5).unwrap_err(),
            vec![ValidationError::NonPositiveTransfer(-5)]
        );
        assert!(validate_transfer_amount(0).is_err());
    }

    #[test]
    fn test_negative_initial_balance() {
        let mut config = WalkthroughConfig::default();
        config.walkthrough.initial_balance_tinybars = -1;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NegativeInitialBalance(-1)]);
    }
}
