use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::events::PoolInitialized;
use crate::state::Pool;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    // init_if_needed so a second call reaches the handler and fails with
    // AlreadyInitialized instead of a system program error
    #[account(
        init_if_needed,
        payer = authority,
        space = Pool::DISCRIMINATOR.len() + Pool::INIT_SPACE,
        seeds = [Pool::SEED_PREFIX, mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init_if_needed,
        payer = authority,
        token::mint = mint,
        token::authority = pool,
        token::token_program = token_program,
        seeds = [Pool::VAULT_SEED_PREFIX, pool.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps, fee_basis_points: u16) -> Result<()> {
        self.pool.initialize(
            self.authority.key(),
            self.mint.key(),
            fee_basis_points,
            bumps.pool,
            bumps.vault,
        )?;

        msg!(
            "Pool initialized for mint {} with authority {}, fee: {} bps",
            self.mint.key(),
            self.authority.key(),
            fee_basis_points
        );

        emit!(PoolInitialized {
            pool: self.pool.key(),
            authority: self.authority.key(),
            mint: self.mint.key(),
            fee_basis_points,
        });

        Ok(())
    }
}
