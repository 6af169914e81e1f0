use anchor_lang::prelude::*;
use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

#[derive(Accounts)]
pub struct LedgerAdmin<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump[0],
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

pub fn transfer_admin<'info>(
    ctx: Context<'_, '_, '_, 'info, LedgerAdmin<'info>>,
    new_admin: Pubkey,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let previous_admin = ledger.admin;
    ledger.set_admin(ctx.accounts.admin.key(), new_admin)?;

    emit!(LedgerAdminChanged {
        ledger: ledger.key(),
        previous_admin,
        new_admin,
    });

    Ok(())
}

pub fn set_registry<'info>(
    ctx: Context<'_, '_, '_, 'info, LedgerAdmin<'info>>,
    registry: Pubkey,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let previous_registry = ledger.registry;
    ledger.set_registry(ctx.accounts.admin.key(), registry)?;

    emit!(RegistryUpdated {
        ledger: ledger.key(),
        previous_registry,
        registry,
    });

    Ok(())
}

#[event]
pub struct LedgerAdminChanged {
    pub ledger: Pubkey,
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct RegistryUpdated {
    pub ledger: Pubkey,
    pub previous_registry: Pubkey,
    pub registry: Pubkey,
}
