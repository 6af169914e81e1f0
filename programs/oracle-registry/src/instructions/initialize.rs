use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::error::Error;
use crate::state::{Registry, REGISTRY_SIZE, REGISTRY_VERSION};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        seeds = [REGISTRY_SEED],
        bump,
        space = REGISTRY_SIZE,
        payer = admin,
    )]
    pub registry: Box<Account<'info, Registry>>,

    pub system_program: Program<'info, System>,
}

pub fn initialize<'info>(
    ctx: Context<'_, '_, '_, 'info, Initialize<'info>>,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.bump = [*ctx.bumps.get("registry").ok_or(Error::BumpNotFound)?];
    registry.version = REGISTRY_VERSION;
    registry.admin = ctx.accounts.admin.key();
    registry.reporter_count = 0;

    emit!(RegistryInitialized {
        registry: registry.key(),
        admin: registry.admin,
    });

    Ok(())
}

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub admin: Pubkey,
}
