use anchor_lang::prelude::*;
use crate::errors::FlashLoanError;
use crate::utils::{calculate_amount_due, calculate_fee, verify_repayment};

/// Outstanding flash loan against a pool.
///
/// Lives in the pool's `loan` slot only between a `borrow` and the `repay`
/// that closes it. `borrow` refuses to run unless that `repay` is present
/// later in the same transaction, so a committed pool never carries one.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct LoanMarker {
    /// Signer that opened the loan and must close it
    pub borrower: Pubkey,

    /// Amount lent out of the reserve
    pub principal: u64,

    /// Fee rate at borrow time (basis points)
    pub fee_basis_points: u16,

    /// ceil(principal * fee_basis_points / 10000)
    pub fee_due: u64,

    /// principal + fee_due
    pub amount_due: u64,

    /// Pool reserve before the principal left
    pub reserve_before: u64,
}

impl LoanMarker {
    pub fn open(
        reserve: u64,
        fee_basis_points: u16,
        principal: u64,
        borrower: Pubkey,
    ) -> Result<Self> {
        require!(principal > 0, FlashLoanError::ZeroPrincipal);
        require!(principal <= reserve, FlashLoanError::InsufficientReserve);

        let fee_due = calculate_fee(principal, fee_basis_points)?;
        let amount_due = calculate_amount_due(principal, fee_basis_points)?;

        Ok(Self {
            borrower,
            principal,
            fee_basis_points,
            fee_due,
            amount_due,
            reserve_before: reserve,
        })
    }

    /// Settle against `amount_returned` and return the tip paid above
    /// `amount_due`.
    pub fn close(&self, amount_returned: u64) -> Result<u64> {
        verify_repayment(self, amount_returned)?;
        amount_returned
            .checked_sub(self.amount_due)
            .ok_or(FlashLoanError::UnderRepayment.into())
    }
}

/// Outcome of a successful repay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Repayment {
    pub marker: LoanMarker,
    pub amount_returned: u64,
    pub tip: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_computes_amount_due() {
        let borrower = Pubkey::new_unique();
        let marker = LoanMarker::open(1_000_000, 100, 100_000, borrower).unwrap();

        assert_eq!(marker.borrower, borrower);
        assert_eq!(marker.principal, 100_000);
        assert_eq!(marker.fee_due, 1_000);
        assert_eq!(marker.amount_due, 101_000);
        assert_eq!(marker.reserve_before, 1_000_000);
    }

    #[test]
    fn test_open_rejects_zero_principal() {
        let err = LoanMarker::open(1_000, 100, 0, Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, FlashLoanError::ZeroPrincipal.into());
    }

    #[test]
    fn test_open_rejects_principal_above_reserve() {
        let err = LoanMarker::open(1_000, 100, 1_001, Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, FlashLoanError::InsufficientReserve.into());

        // Whole reserve is fine
        assert!(LoanMarker::open(1_000, 100, 1_000, Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn test_close() {
        let marker = LoanMarker::open(1_000_000, 100, 100_000, Pubkey::new_unique()).unwrap();

        assert_eq!(marker.close(101_000).unwrap(), 0);
        assert_eq!(marker.close(101_250).unwrap(), 250);
        assert_eq!(
            marker.close(100_999).unwrap_err(),
            FlashLoanError::UnderRepayment.into()
        );
    }
}
