use anchor_lang::prelude::*;
use crate::errors::FlashLoanError;
use crate::state::{LoanMarker, Repayment};
use crate::utils::{ensure_settled, validate_fee_rate, verify_reserve_restored};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    /// May withdraw reserve and change the fee rate
    pub authority: Pubkey,

    /// Token mint this pool lends
    pub mint: Pubkey,

    /// Lendable amount held in the vault (native token units)
    pub asset_reserve: u64,

    /// Flash loan fee (basis points, 100 = 1%)
    pub fee_basis_points: u16,

    /// Lifetime fees credited by repayments, tips excluded
    pub total_fees_collected: u64,

    /// Open loan, only ever set inside a borrow/repay transaction
    pub loan: Option<LoanMarker>,

    /// Bump seed for pool PDA
    pub bump: u8,

    /// Bump seed for vault PDA
    pub vault_bump: u8,
}

impl Pool {
    pub const SEED_PREFIX: &'static [u8] = b"pool";
    pub const VAULT_SEED_PREFIX: &'static [u8] = b"vault";

    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn has_outstanding_loan(&self) -> bool {
        self.loan.is_some()
    }

    pub fn initialize(
        &mut self,
        authority: Pubkey,
        mint: Pubkey,
        fee_basis_points: u16,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), FlashLoanError::AlreadyInitialized);
        validate_fee_rate(fee_basis_points)?;

        *self = Pool {
            authority,
            mint,
            asset_reserve: 0,
            fee_basis_points,
            total_fees_collected: 0,
            loan: None,
            bump,
            vault_bump,
        };

        Ok(())
    }

    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        ensure_settled(self)?;
        self.asset_reserve = self
            .asset_reserve
            .checked_add(amount)
            .ok_or(FlashLoanError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn withdraw(&mut self, caller: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*caller, self.authority, FlashLoanError::Unauthorized);
        ensure_settled(self)?;
        self.asset_reserve = self
            .asset_reserve
            .checked_sub(amount)
            .ok_or(FlashLoanError::InsufficientReserve)?;
        Ok(())
    }

    pub fn set_fee(&mut self, caller: &Pubkey, fee_basis_points: u16) -> Result<()> {
        require_keys_eq!(*caller, self.authority, FlashLoanError::Unauthorized);
        ensure_settled(self)?;
        validate_fee_rate(fee_basis_points)?;
        self.fee_basis_points = fee_basis_points;
        Ok(())
    }

    /// Open a loan and take the principal out of the reserve.
    pub fn open_loan(&mut self, principal: u64, borrower: Pubkey) -> Result<LoanMarker> {
        require!(self.loan.is_none(), FlashLoanError::ReentrantBorrow);

        let marker = LoanMarker::open(
            self.asset_reserve,
            self.fee_basis_points,
            principal,
            borrower,
        )?;

        self.asset_reserve = self
            .asset_reserve
            .checked_sub(principal)
            .ok_or(FlashLoanError::InsufficientReserve)?;
        self.loan = Some(marker);

        Ok(marker)
    }

    /// Close the open loan. Nothing is written unless every check passes.
    pub fn close_loan(&mut self, amount_returned: u64, borrower: &Pubkey) -> Result<Repayment> {
        let marker = self.loan.ok_or(FlashLoanError::NoOutstandingLoan)?;
        require_keys_eq!(*borrower, marker.borrower, FlashLoanError::BorrowerMismatch);

        let tip = marker.close(amount_returned)?;

        let reserve_after = self
            .asset_reserve
            .checked_add(amount_returned)
            .ok_or(FlashLoanError::ArithmeticOverflow)?;
        verify_reserve_restored(&marker, reserve_after)?;

        self.asset_reserve = reserve_after;
        self.total_fees_collected = self.total_fees_collected.saturating_add(marker.fee_due);
        self.loan = None;

        Ok(Repayment {
            marker,
            amount_returned,
            tip,
        })
    }
}
