use anchor_lang::prelude::*;
use solana_program::{account_info::AccountInfo, program::invoke, system_instruction};
use crate::error::Error;

pub use oracle_registry::util::is_default;

/// Moves lamports out of a system-owned signer, e.g. a stake into custody.
pub fn transfer_sol<'a>(
    from: &AccountInfo<'a>,
    to: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    let transfer_ix = &system_instruction::transfer(
        from.key,
        to.key,
        amount,
    );

    invoke(
        transfer_ix,
        &[
            from.clone(),
            to.clone(),
            system_program.clone(),
        ],
    )?;

    Ok(())
}

/// Moves lamports out of an account owned by this program. `reserve` is the
/// balance `from` has to keep, normally its rent-exempt minimum.
pub fn transfer_sol_pda(
    from: &AccountInfo,
    to: &AccountInfo,
    amount: u64,
    reserve: u64,
) -> Result<()> {
    let from_lamports = from.lamports()
        .checked_sub(amount)
        .ok_or(Error::TransferFailed)?;
    if from_lamports < reserve {
        msg!("Custody holds {} lamports, {} requested", from.lamports(), amount);
        return err!(Error::TransferFailed);
    }
    let to_lamports = to.lamports()
        .checked_add(amount)
        .ok_or(Error::TransferFailed)?;

    **from.try_borrow_mut_lamports()? = from_lamports;
    **to.try_borrow_mut_lamports()? = to_lamports;

    Ok(())
}
