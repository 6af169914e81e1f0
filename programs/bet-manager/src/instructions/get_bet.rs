use anchor_lang::prelude::*;
use crate::constants::{BET_SEED, LEDGER_SEED};
use crate::error::Error;
use crate::state::{Bet, Ledger};

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct GetBet<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump[0],
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// CHECK: Missing bets are reported as BetNotFound
    #[account(
        seeds = [BET_SEED, ledger.key().as_ref(), &bet_id.to_le_bytes()],
        bump,
    )]
    pub bet: UncheckedAccount<'info>,
}

pub fn get_bet<'info>(
    ctx: Context<'_, '_, '_, 'info, GetBet<'info>>,
    bet_id: u64,
) -> Result<Bet> {
    let bet_info = ctx.accounts.bet.to_account_info();
    if !ctx.accounts.ledger.contains(bet_id)
        || bet_info.owner != &crate::ID
        || bet_info.data_is_empty() {
        return err!(Error::BetNotFound);
    }

    let data = bet_info.try_borrow_data()?;
    let bet = Bet::try_deserialize(&mut data.as_ref())?;
    Ok(bet)
}
