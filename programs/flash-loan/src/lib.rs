#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;

declare_id!("DgwXQDmYPLCZ12iTUq53dhzn68JpnABc8KjUFv3EbAwn");

#[program]
pub mod flash_loan {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, fee_basis_points: u16) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps, fee_basis_points)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(amount)
    }

    pub fn set_fee(ctx: Context<SetFee>, fee_basis_points: u16) -> Result<()> {
        ctx.accounts.set_fee(fee_basis_points)
    }

    /// Must be followed by a `repay` for the same pool and borrower later
    /// in the same transaction.
    pub fn borrow(ctx: Context<Loan>, principal: u64) -> Result<()> {
        ctx.accounts.borrow(principal)
    }

    pub fn repay(ctx: Context<Loan>, amount_returned: u64) -> Result<()> {
        ctx.accounts.repay(amount_returned)
    }
}
