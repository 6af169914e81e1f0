use anchor_lang::prelude::*;
use crate::constants::{REGISTRY_SEED, REPORTER_SEED};
use crate::state::Registry;
use crate::util::is_trusted_reporter;

#[derive(Accounts)]
#[instruction(identity: Pubkey)]
pub struct IsTrusted<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump[0],
    )]
    pub registry: Box<Account<'info, Registry>>,

    /// CHECK: May not exist yet; inspected by is_trusted_reporter
    #[account(
        seeds = [REPORTER_SEED, registry.key().as_ref(), identity.as_ref()],
        bump,
    )]
    pub reporter: UncheckedAccount<'info>,
}

pub fn is_trusted<'info>(
    ctx: Context<'_, '_, '_, 'info, IsTrusted<'info>>,
    identity: Pubkey,
) -> Result<bool> {
    is_trusted_reporter(
        &ctx.accounts.registry.key(),
        &identity,
        &ctx.accounts.reporter.to_account_info(),
    )
}
