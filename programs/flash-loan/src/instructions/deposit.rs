use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface, TransferChecked, transfer_checked};
use crate::events::Deposited;
use crate::state::Pool;
use crate::utils::verify_vault_backing;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
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
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        self.pool.deposit(amount)?;

        if amount > 0 {
            let transfer_accounts = TransferChecked {
                from: self.depositor_token_account.to_account_info(),
                mint: self.mint.to_account_info(),
                to: self.vault.to_account_info(),
                authority: self.depositor.to_account_info(),
            };

            let cpi_ctx = CpiContext::new(
                self.token_program.to_account_info(),
                transfer_accounts,
            );

            transfer_checked(cpi_ctx, amount, self.mint.decimals)?;
        }

        // Transfer-fee mints deliver less than `amount`
        self.vault.reload()?;
        verify_vault_backing(self.pool.asset_reserve, self.vault.amount)?;

        msg!("Deposited {} into pool, reserve: {}", amount, self.pool.asset_reserve);

        emit!(Deposited {
            pool: self.pool.key(),
            depositor: self.depositor.key(),
            amount,
            asset_reserve: self.pool.asset_reserve,
        });

        Ok(())
    }
}
