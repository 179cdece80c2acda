use anchor_lang::prelude::*;
use crate::errors::FlashLoanError;
use crate::state::{LoanMarker, Pool};
use crate::utils::fees::{calculate_amount_due, calculate_fee};

/// Re-derive the fee and amount due from the marker's principal and
/// captured rate. A marker that disagrees with itself is never settled.
pub fn verify_marker(marker: &LoanMarker) -> Result<()> {
    let fee_due = calculate_fee(marker.principal, marker.fee_basis_points)?;
    let amount_due = calculate_amount_due(marker.principal, marker.fee_basis_points)?;

    require_eq!(fee_due, marker.fee_due, FlashLoanError::InvariantViolation);
    require_eq!(amount_due, marker.amount_due, FlashLoanError::InvariantViolation);
    Ok(())
}

pub fn verify_repayment(marker: &LoanMarker, amount_returned: u64) -> Result<()> {
    verify_marker(marker)?;
    require!(
        amount_returned >= marker.amount_due,
        FlashLoanError::UnderRepayment
    );
    Ok(())
}

/// A completed loan cycle never leaves the reserve below where it started.
pub fn verify_reserve_restored(marker: &LoanMarker, reserve_after: u64) -> Result<()> {
    require!(
        reserve_after >= marker.reserve_before,
        FlashLoanError::InvariantViolation
    );
    Ok(())
}

/// Tokens sent straight to the vault may exceed the reserve, never the
/// other way round.
pub fn verify_vault_backing(asset_reserve: u64, vault_balance: u64) -> Result<()> {
    require!(
        vault_balance >= asset_reserve,
        FlashLoanError::VaultBalanceMismatch
    );
    Ok(())
}

pub fn ensure_settled(pool: &Pool) -> Result<()> {
    require!(pool.loan.is_none(), FlashLoanError::LoanInProgress);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(principal: u64, fee_basis_points: u16) -> LoanMarker {
        LoanMarker::open(1_000_000, fee_basis_points, principal, Pubkey::new_unique()).unwrap()
    }

    #[test]
    fn test_verify_marker() {
        let good = marker(100_000, 100);
        assert!(verify_marker(&good).is_ok());

        let mut tampered = good;
        tampered.amount_due -= 1;
        assert_eq!(
            verify_marker(&tampered).unwrap_err(),
            FlashLoanError::InvariantViolation.into()
        );

        let mut tampered = good;
        tampered.fee_basis_points = 50;
        assert_eq!(
            verify_marker(&tampered).unwrap_err(),
            FlashLoanError::InvariantViolation.into()
        );
    }

    #[test]
    fn test_verify_repayment() {
        let m = marker(100_000, 100);
        assert!(verify_repayment(&m, 101_000).is_ok());
        assert!(verify_repayment(&m, 150_000).is_ok());
        assert_eq!(
            verify_repayment(&m, 100_999).unwrap_err(),
            FlashLoanError::UnderRepayment.into()
        );
    }

    #[test]
    fn test_verify_reserve_restored() {
        let m = marker(100_000, 100);
        assert!(verify_reserve_restored(&m, 1_000_000).is_ok());
        assert!(verify_reserve_restored(&m, 1_001_000).is_ok());
        assert_eq!(
            verify_reserve_restored(&m, 999_999).unwrap_err(),
            FlashLoanError::InvariantViolation.into()
        );
    }

    #[test]
    fn test_verify_vault_backing() {
        assert!(verify_vault_backing(500, 500).is_ok());
        assert!(verify_vault_backing(500, 501).is_ok());
        assert_eq!(
            verify_vault_backing(500, 499).unwrap_err(),
            FlashLoanError::VaultBalanceMismatch.into()
        );
    }
}
