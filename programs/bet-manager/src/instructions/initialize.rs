use anchor_lang::prelude::*;
use crate::constants::LEDGER_SEED;
use crate::error::Error;
use crate::state::{Ledger, LEDGER_SIZE, LEDGER_VERSION};
use crate::util::is_default;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        seeds = [LEDGER_SEED],
        bump,
        space = LEDGER_SIZE,
        payer = admin,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    pub system_program: Program<'info, System>,
}

pub fn initialize<'info>(
    ctx: Context<'_, '_, '_, 'info, Initialize<'info>>,
    registry: Pubkey,
) -> Result<()> {
    if is_default(registry) {
        return err!(Error::InvalidRegistry);
    }

    let ledger = &mut ctx.accounts.ledger;
    ledger.bump = [*ctx.bumps.get("ledger").ok_or(Error::BumpNotFound)?];
    ledger.version = LEDGER_VERSION;
    ledger.admin = ctx.accounts.admin.key();
    ledger.registry = registry;
    ledger.bet_count = 0;

    emit!(LedgerInitialized {
        ledger: ledger.key(),
        admin: ledger.admin,
        registry,
    });

    Ok(())
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub registry: Pubkey,
}
