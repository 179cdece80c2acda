use anchor_lang::prelude::*;
use crate::errors::FlashLoanError;
use crate::events::FeeUpdated;
use crate::state::Pool;

#[derive(Accounts)]
pub struct SetFee<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX, pool.mint.as_ref()],
        bump = pool.bump,
        constraint = pool.authority == authority.key() @ FlashLoanError::Unauthorized,
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> SetFee<'info> {
    pub fn set_fee(&mut self, fee_basis_points: u16) -> Result<()> {
        let previous_fee_basis_points = self.pool.fee_basis_points;
        self.pool.set_fee(&self.authority.key(), fee_basis_points)?;

        msg!("Pool fee updated to {} bps", fee_basis_points);

        emit!(FeeUpdated {
            pool: self.pool.key(),
            previous_fee_basis_points,
            fee_basis_points,
        });

        Ok(())
    }
}
