use anchor_lang::prelude::*;
use crate::constants::{BET_SEED, LEDGER_SEED};
use crate::error::Error;
use crate::state::{Bet, Ledger};
use crate::util::transfer_sol_pda;

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct TimeoutBet<'info> {
    pub caller: Signer<'info>,

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

    /// CHECK: Compared against bet.creator in the handler
    #[account(mut)]
    pub creator: UncheckedAccount<'info>,

    /// CHECK: Compared against bet.joiner in the handler
    #[account(mut)]
    pub joiner: UncheckedAccount<'info>,
}

pub fn timeout_bet<'info>(
    ctx: Context<'_, '_, '_, 'info, TimeoutBet<'info>>,
    bet_id: u64,
) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;

    let bet = &mut ctx.accounts.bet;
    let [creator_refund, joiner_refund] = bet.timeout(timestamp)?;

    require_keys_eq!(ctx.accounts.creator.key(), creator_refund.recipient, Error::CounterpartyMismatch);
    require_keys_eq!(ctx.accounts.joiner.key(), joiner_refund.recipient, Error::CounterpartyMismatch);

    let bet_info = bet.to_account_info();
    let reserve = Rent::get()?.minimum_balance(bet_info.data_len());
    transfer_sol_pda(
        &bet_info,
        &ctx.accounts.creator.to_account_info(),
        creator_refund.amount,
        reserve,
    )?;
    transfer_sol_pda(
        &bet_info,
        &ctx.accounts.joiner.to_account_info(),
        joiner_refund.amount,
        reserve,
    )?;
    msg!("bet {} expired at {}, refunded both sides", bet_id, bet.deadline);

    emit!(BetRefunded {
        ledger: ctx.accounts.ledger.key(),
        bet_id,
        creator: creator_refund.recipient,
        joiner: joiner_refund.recipient,
        amount: creator_refund.amount,
    });

    Ok(())
}

#[event]
pub struct BetRefunded {
    pub ledger: Pubkey,
    pub bet_id: u64,
    pub creator: Pubkey,
    pub joiner: Pubkey,
    /// Returned to each side
    pub amount: u64,
}
