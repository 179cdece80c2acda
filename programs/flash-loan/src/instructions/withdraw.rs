use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface, TransferChecked, transfer_checked};
use crate::errors::FlashLoanError;
use crate::events::Withdrawn;
use crate::state::Pool;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
        constraint = pool.authority == authority.key() @ FlashLoanError::Unauthorized,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [Pool::VAULT_SEED_PREFIX, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        self.pool.withdraw(&self.authority.key(), amount)?;

        let accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.destination.to_account_info(),
            authority: self.pool.to_account_info(),
        };
        let mint_key = self.mint.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            Pool::SEED_PREFIX,
            mint_key.as_ref(),
            &[self.pool.bump],
            ]
        ];
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            signer_seeds
        );

        transfer_checked(ctx, amount, self.mint.decimals)?;

        msg!("Withdrew {} from pool, reserve: {}", amount, self.pool.asset_reserve);

        emit!(Withdrawn {
            pool: self.pool.key(),
            authority: self.authority.key(),
            amount,
            asset_reserve: self.pool.asset_reserve,
        });

        Ok(())
    }
}
