use anchor_lang::prelude::*;
use crate::constants::{BET_SEED, LEDGER_SEED};
use crate::state::{Bet, Ledger};
use crate::util::transfer_sol;

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct JoinBet<'info> {
    #[account(mut)]
    pub joiner: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

pub fn join_bet<'info>(
    ctx: Context<'_, '_, '_, 'info, JoinBet<'info>>,
    bet_id: u64,
    amount: u64,
) -> Result<()> {
    let joiner = ctx.accounts.joiner.key();

    let bet = &mut ctx.accounts.bet;
    bet.join(joiner, amount)?;

    transfer_sol(
        &ctx.accounts.joiner.to_account_info(),
        &bet.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        amount,
    )?;
    msg!("bet {} holds {} lamports", bet_id, bet.custody()?);

    emit!(BetJoined {
        ledger: ctx.accounts.ledger.key(),
        bet_id,
        creator: bet.creator,
        joiner,
        amount,
    });

    Ok(())
}

#[event]
pub struct BetJoined {
    pub ledger: Pubkey,
    pub bet_id: u64,
    pub creator: Pubkey,
    pub joiner: Pubkey,
    pub amount: u64,
}
