use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TransferChecked, transfer_checked};
use crate::events::LoanRepaid;
use crate::instructions::Loan;
use crate::utils::verify_vault_backing;

impl<'info> Loan<'info> {
    pub fn repay(&mut self, amount_returned: u64) -> Result<()> {
        let repayment = self.pool.close_loan(amount_returned, &self.borrower.key())?;

        let transfer_accounts = TransferChecked {
            from: self.borrower_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.borrower.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            transfer_accounts,
        );

        transfer_checked(cpi_ctx, amount_returned, self.mint.decimals)?;

        self.vault.reload()?;
        verify_vault_backing(self.pool.asset_reserve, self.vault.amount)?;

        msg!(
            "Flash loan repaid: returned {}, fee {}, tip {}, reserve {}",
            repayment.amount_returned,
            repayment.marker.fee_due,
            repayment.tip,
            self.pool.asset_reserve
        );

        emit!(LoanRepaid {
            pool: self.pool.key(),
            borrower: repayment.marker.borrower,
            principal: repayment.marker.principal,
            fee_paid: repayment.marker.fee_due,
            tip: repayment.tip,
            amount_returned: repayment.amount_returned,
            asset_reserve: self.pool.asset_reserve,
        });

        Ok(())
    }
}
