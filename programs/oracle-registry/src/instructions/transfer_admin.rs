use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::state::Registry;

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump[0],
    )]
    pub registry: Box<Account<'info, Registry>>,
}

pub fn transfer_admin<'info>(
    ctx: Context<'_, '_, '_, 'info, TransferAdmin<'info>>,
    new_admin: Pubkey,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let previous_admin = registry.admin;
    registry.set_admin(ctx.accounts.admin.key(), new_admin)?;

    emit!(RegistryAdminChanged {
        registry: registry.key(),
        previous_admin,
        new_admin,
    });

    Ok(())
}

#[event]
pub struct RegistryAdminChanged {
    pub registry: Pubkey,
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}
