use anchor_lang::prelude::*;
use crate::constants::{BET_SEED, LEDGER_SEED};
use crate::state::{Bet, Ledger};
use crate::util::transfer_sol_pda;

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct CancelBet<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump[0],
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [BET_SEED, ledger.key().as_ref(), &bet_id.to_le_bytes()],
        bump = bet.bump[0],
        has_one = ledger,
    )]
    pub bet: Box<Account<'info, Bet>>,
}

pub fn cancel_bet<'info>(
    ctx: Context<'_, '_, '_, 'info, CancelBet<'info>>,
    bet_id: u64,
) -> Result<()> {
    let bet = &mut ctx.accounts.bet;
    let refund = bet.cancel(ctx.accounts.creator.key())?;

    let bet_info = bet.to_account_info();
    let reserve = Rent::get()?.minimum_balance(bet_info.data_len());
    transfer_sol_pda(
        &bet_info,
        &ctx.accounts.creator.to_account_info(),
        refund.amount,
        reserve,
    )?;

    emit!(BetCancelled {
        ledger: ctx.accounts.ledger.key(),
        bet_id,
        creator: refund.recipient,
        amount: refund.amount,
    });

    Ok(())
}

#[event]
pub struct BetCancelled {
    pub ledger: Pubkey,
    pub bet_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
}
