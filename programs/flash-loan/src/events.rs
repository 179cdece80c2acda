use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub fee_basis_points: u16,
}

#[event]
pub struct Deposited {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub asset_reserve: u64,
}

#[event]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub asset_reserve: u64,
}

#[event]
pub struct FeeUpdated {
    pub pool: Pubkey,
    pub previous_fee_basis_points: u16,
    pub fee_basis_points: u16,
}

#[event]
pub struct LoanBorrowed {
    pub pool: Pubkey,
    pub borrower: Pubkey,
    pub principal: u64,
    pub fee_due: u64,
    pub amount_due: u64,
}

#[event]
pub struct LoanRepaid {
    pub pool: Pubkey,
    pub borrower: Pubkey,
    pub principal: u64,
    pub fee_paid: u64,
    pub tip: u64,
    pub amount_returned: u64,
    pub asset_reserve: u64,
}
