use anchor_lang::prelude::*;
use crate::errors::FlashLoanError;
use crate::utils::constants::*;

pub fn validate_fee_rate(fee_basis_points: u16) -> Result<()> {
    require!(
        fee_basis_points <= MAX_FEE_BASIS_POINTS,
        FlashLoanError::InvalidFeeRate
    );
    Ok(())
}

/// Fee owed on a flash loan, rounded up so the pool never loses the
/// fractional unit.
/// fee = ceil(principal * fee_bps / 10000)
pub fn calculate_fee(principal: u64, fee_basis_points: u16) -> Result<u64> {
    validate_fee_rate(fee_basis_points)?;

    let numerator = (principal as u128)
        .checked_mul(fee_basis_points as u128)
        .ok_or(FlashLoanError::ArithmeticOverflow)?;
    let divisor = BASIS_POINTS_DIVISOR as u128;
    let fee = numerator
        .checked_add(divisor - 1)
        .map(|v| v / divisor)
        .ok_or(FlashLoanError::ArithmeticOverflow)?;

    u64::try_from(fee).map_err(|_| FlashLoanError::ArithmeticOverflow.into())
}

/// Principal plus fee.
pub fn calculate_amount_due(principal: u64, fee_basis_points: u16) -> Result<u64> {
    let fee = calculate_fee(principal, fee_basis_points)?;
    principal
        .checked_add(fee)
        .ok_or(FlashLoanError::ArithmeticOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_fee_exact() {
        // 1% of 100_000 = 1_000
        assert_eq!(calculate_fee(100_000, 100).unwrap(), 1_000);

        // 0.09% of 1_000_000 = 900
        assert_eq!(calculate_fee(1_000_000, 9).unwrap(), 900);
    }

    #[test]
    fn test_calculate_fee_rounds_up() {
        // 1% of 150 = 1.5 -> 2
        assert_eq!(calculate_fee(150, 100).unwrap(), 2);

        // 0.01% of 1 = 0.0001 -> 1
        assert_eq!(calculate_fee(1, 1).unwrap(), 1);
    }

    #[test]
    fn test_calculate_fee_bounds() {
        assert_eq!(calculate_fee(500, 0).unwrap(), 0);
        assert_eq!(calculate_fee(500, MAX_FEE_BASIS_POINTS).unwrap(), 500);
        assert_eq!(calculate_fee(u64::MAX, MAX_FEE_BASIS_POINTS).unwrap(), u64::MAX);
        assert_eq!(
            calculate_fee(500, MAX_FEE_BASIS_POINTS + 1).unwrap_err(),
            FlashLoanError::InvalidFeeRate.into()
        );
    }

    #[test]
    fn test_calculate_amount_due() {
        assert_eq!(calculate_amount_due(100_000, 100).unwrap(), 101_000);
        assert_eq!(calculate_amount_due(0, 100).unwrap(), 0);
        assert_eq!(
            calculate_amount_due(u64::MAX, 1).unwrap_err(),
            FlashLoanError::ArithmeticOverflow.into()
        );
    }
}
