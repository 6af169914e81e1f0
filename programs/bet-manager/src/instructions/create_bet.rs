use anchor_lang::prelude::*;
use crate::constants::{BET_SEED, LEDGER_SEED};
use crate::error::Error;
use crate::state::{Bet, BetTerms, Ledger, BET_SIZE};
use crate::util::transfer_sol;

#[derive(Accounts)]
pub struct CreateBet<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump[0],
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        init,
        seeds = [BET_SEED, ledger.key().as_ref(), &ledger.bet_count.to_le_bytes()],
        bump,
        space = BET_SIZE,
        payer = creator,
    )]
    pub bet: Box<Account<'info, Bet>>,

    pub system_program: Program<'info, System>,
}

pub fn create_bet<'info>(
    ctx: Context<'_, '_, '_, 'info, CreateBet<'info>>,
    description: String,
    deadline: i64,
    amount: u64,
    terms: Option<BetTerms>,
) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let creator = ctx.accounts.creator.key();

    let ledger = &mut ctx.accounts.ledger;
    let bet_id = ledger.next_bet_id()?;

    let bet = &mut ctx.accounts.bet;
    bet.open(
        ledger.key(),
        bet_id,
        creator,
        amount,
        description,
        terms,
        deadline,
        timestamp,
    )?;
    bet.bump = [*ctx.bumps.get("bet").ok_or(Error::BumpNotFound)?];

    // Stake goes on top of the rent the bet account was funded with
    transfer_sol(
        &ctx.accounts.creator.to_account_info(),
        &bet.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        amount,
    )?;
    msg!("bet {} holds {} lamports", bet_id, bet.custody()?);

    emit!(BetCreated {
        ledger: ledger.key(),
        bet_id,
        creator,
        amount,
        deadline,
        description: bet.description.clone(),
    });

    Ok(())
}

#[event]
pub struct BetCreated {
    pub ledger: Pubkey,
    pub bet_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
    pub deadline: i64,
    pub description: String,
}
