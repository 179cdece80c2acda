use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked,
    load_instruction_at_checked,
};
use crate::errors::FlashLoanError;
use crate::instructions::{BORROWER_INDEX, POOL_INDEX};

/// True when `ix` is this program's `repay` for `pool`, signed by `borrower`.
pub fn is_matching_repay(ix: &Instruction, pool: &Pubkey, borrower: &Pubkey) -> bool {
    ix.program_id == crate::ID
        && ix.data.starts_with(crate::instruction::Repay::DISCRIMINATOR)
        && ix
            .accounts
            .get(POOL_INDEX)
            .is_some_and(|meta| meta.pubkey == *pool)
        && ix
            .accounts
            .get(BORROWER_INDEX)
            .is_some_and(|meta| meta.pubkey == *borrower && meta.is_signer)
}

/// Scan the top-level instructions after the executing one for a repay
/// that closes this loan. If none exists the borrow must not go through,
/// otherwise the principal could leave the pool for good.
///
/// The repay has to be a top-level instruction signed by the borrower, so a
/// program-derived borrower borrowing through CPI can never pass this check.
pub fn require_repay_follows(
    instructions_sysvar: &AccountInfo,
    pool: &Pubkey,
    borrower: &Pubkey,
) -> Result<()> {
    let current = load_current_index_checked(instructions_sysvar)
        .map_err(|_| FlashLoanError::InvalidInstructionSysvar)? as usize;

    let mut index = current + 1;
    while let Ok(ix) = load_instruction_at_checked(index, instructions_sysvar) {
        if is_matching_repay(&ix, pool, borrower) {
            return Ok(());
        }
        index += 1;
    }

    err!(FlashLoanError::MissingRepay)
}
