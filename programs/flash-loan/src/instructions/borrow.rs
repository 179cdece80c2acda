use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TransferChecked, transfer_checked};
use crate::events::LoanBorrowed;
use crate::instructions::Loan;
use crate::state::Pool;
use crate::utils::require_repay_follows;

impl<'info> Loan<'info> {
    pub fn borrow(&mut self, principal: u64) -> Result<()> {
        let marker = self.pool.open_loan(principal, self.borrower.key())?;

        require_repay_follows(
            &self.instructions.to_account_info(),
            &self.pool.key(),
            &self.borrower.key(),
        )?;

        let accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.borrower_token_account.to_account_info(),
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

        transfer_checked(ctx, principal, self.mint.decimals)?;

        msg!(
            "Flash loan opened: principal {}, fee {}, amount due {}",
            marker.principal,
            marker.fee_due,
            marker.amount_due
        );

        emit!(LoanBorrowed {
            pool: self.pool.key(),
            borrower: marker.borrower,
            principal: marker.principal,
            fee_due: marker.fee_due,
            amount_due: marker.amount_due,
        });

        Ok(())
    }
}
