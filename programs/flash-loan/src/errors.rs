use anchor_lang::prelude::*;

#[error_code]
pub enum FlashLoanError {
    #[msg("Fee rate must be between 0 and 10000 basis points")]
    InvalidFeeRate,

    #[msg("Pool is already initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized: only the pool authority can perform this action")]
    Unauthorized,

    #[msg("Repayment signer does not match the borrower of the outstanding loan")]
    BorrowerMismatch,

    #[msg("Pool reserve is insufficient for this amount")]
    InsufficientReserve,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,

    #[msg("Returned amount is below principal plus fee")]
    UnderRepayment,

    #[msg("Loan principal must be greater than zero")]
    ZeroPrincipal,

    #[msg("Loan accounting does not match the recorded marker")]
    InvariantViolation,

    #[msg("Vault token balance does not back the pool reserve")]
    VaultBalanceMismatch,

    #[msg("A loan against this pool is already outstanding in this transaction")]
    ReentrantBorrow,

    #[msg("No outstanding loan to repay")]
    NoOutstandingLoan,

    #[msg("Pool cannot be modified while a loan is outstanding")]
    LoanInProgress,

    #[msg("Borrow must be followed by a matching repay in the same transaction")]
    MissingRepay,

    #[msg("Instructions sysvar could not be read")]
    InvalidInstructionSysvar,

    #[msg("Pool is locked by a concurrent transaction, retry")]
    Contention,
}

/// Coarse classification of failures returned to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authorization,
    Accounting,
    ProtocolState,
    Concurrency,
}

impl FlashLoanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFeeRate | Self::AlreadyInitialized => ErrorCategory::Configuration,
            Self::Unauthorized | Self::BorrowerMismatch => ErrorCategory::Authorization,
            Self::InsufficientReserve
            | Self::ArithmeticOverflow
            | Self::UnderRepayment
            | Self::ZeroPrincipal
            | Self::InvariantViolation
            | Self::VaultBalanceMismatch => ErrorCategory::Accounting,
            Self::ReentrantBorrow
            | Self::NoOutstandingLoan
            | Self::LoanInProgress
            | Self::MissingRepay
            | Self::InvalidInstructionSysvar => ErrorCategory::ProtocolState,
            Self::Contention => ErrorCategory::Concurrency,
        }
    }

    /// Only contention clears up on its own; everything else fails again
    /// for the same inputs.
    pub fn is_retriable(&self) -> bool {
        self.category() == ErrorCategory::Concurrency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(FlashLoanError::InvalidFeeRate.category(), ErrorCategory::Configuration);
        assert_eq!(FlashLoanError::BorrowerMismatch.category(), ErrorCategory::Authorization);
        assert_eq!(FlashLoanError::UnderRepayment.category(), ErrorCategory::Accounting);
        assert_eq!(FlashLoanError::ReentrantBorrow.category(), ErrorCategory::ProtocolState);
        assert_eq!(FlashLoanError::Contention.category(), ErrorCategory::Concurrency);
    }

    #[test]
    fn test_only_contention_is_retriable() {
        assert!(FlashLoanError::Contention.is_retriable());
        assert!(!FlashLoanError::NoOutstandingLoan.is_retriable());
        assert!(!FlashLoanError::InsufficientReserve.is_retriable());
    }
}
