use anchor_lang::prelude::*;
use oracle_registry::util::is_trusted_reporter;
use crate::constants::{BET_SEED, LEDGER_SEED};
use crate::error::Error;
use crate::state::{Bet, Ledger};
use crate::util::transfer_sol_pda;

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct SettleBet<'info> {
    /// Ledger admin or a trusted reporter. A reporter passes its
    /// oracle-registry TrustedReporter account as the first remaining account.
    pub settler: Signer<'info>,

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

pub fn settle_bet<'info>(
    ctx: Context<'_, '_, '_, 'info, SettleBet<'info>>,
    bet_id: u64,
    creator_won: bool,
) -> Result<()> {
    let settler = ctx.accounts.settler.key();
    let ledger = &ctx.accounts.ledger;

    let settler_is_trusted = match ctx.remaining_accounts.first() {
        Some(reporter_record) => is_trusted_reporter(&ledger.registry, &settler, reporter_record)?,
        None => false,
    };
    ledger.authorize_settler(settler, settler_is_trusted)?;

    let bet = &mut ctx.accounts.bet;
    let payout = bet.settle(creator_won)?;

    require_keys_eq!(ctx.accounts.creator.key(), bet.creator, Error::CounterpartyMismatch);
    require_keys_eq!(ctx.accounts.joiner.key(), bet.joiner, Error::CounterpartyMismatch);
    let recipient = if creator_won {
        ctx.accounts.creator.to_account_info()
    } else {
        ctx.accounts.joiner.to_account_info()
    };

    let bet_info = bet.to_account_info();
    let reserve = Rent::get()?.minimum_balance(bet_info.data_len());
    transfer_sol_pda(&bet_info, &recipient, payout.amount, reserve)?;
    msg!("paid {} lamports to {}", payout.amount, payout.recipient);

    emit!(BetSettled {
        ledger: ledger.key(),
        bet_id,
        settler,
        winner: payout.recipient,
        payout: payout.amount,
        creator_won,
    });

    Ok(())
}

#[event]
pub struct BetSettled {
    pub ledger: Pubkey,
    pub bet_id: u64,
    pub settler: Pubkey,
    pub winner: Pubkey,
    pub payout: u64,
    pub creator_won: bool,
}
