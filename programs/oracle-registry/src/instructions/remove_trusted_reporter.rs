use anchor_lang::prelude::*;
use crate::constants::{REGISTRY_SEED, REPORTER_SEED};
use crate::state::{Registry, TrustedReporter, TRUSTED_REPORTER_SIZE};

#[derive(Accounts)]
#[instruction(identity: Pubkey)]
pub struct RemoveTrustedReporter<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump[0],
    )]
    pub registry: Box<Account<'info, Registry>>,

    // A never-added identity gets a blank record so the removal fails with
    // ReporterNotTrusted; the failed transaction discards it again.
    #[account(
        init_if_needed,
        seeds = [REPORTER_SEED, registry.key().as_ref(), identity.as_ref()],
        bump,
        space = TRUSTED_REPORTER_SIZE,
        payer = admin,
    )]
    pub reporter: Box<Account<'info, TrustedReporter>>,

    pub system_program: Program<'info, System>,
}

pub fn remove_trusted_reporter<'info>(
    ctx: Context<'_, '_, '_, 'info, RemoveTrustedReporter<'info>>,
    identity: Pubkey,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_admin(ctx.accounts.admin.key())?;

    ctx.accounts.reporter.revoke()?;
    registry.decrement_reporters()?;
    msg!("trusted reporters: {}", registry.reporter_count);

    emit!(ReporterRemoved {
        registry: registry.key(),
        reporter: identity,
    });

    Ok(())
}

#[event]
pub struct ReporterRemoved {
    pub registry: Pubkey,
    pub reporter: Pubkey,
}
