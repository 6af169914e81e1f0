use anchor_lang::prelude::*;
use crate::constants::{REGISTRY_SEED, REPORTER_SEED};
use crate::error::Error;
use crate::state::{Registry, TrustedReporter, TRUSTED_REPORTER_SIZE};

#[derive(Accounts)]
#[instruction(identity: Pubkey)]
pub struct AddTrustedReporter<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump[0],
    )]
    pub registry: Box<Account<'info, Registry>>,

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

pub fn add_trusted_reporter<'info>(
    ctx: Context<'_, '_, '_, 'info, AddTrustedReporter<'info>>,
    identity: Pubkey,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_admin(ctx.accounts.admin.key())?;

    let timestamp = Clock::get()?.unix_timestamp;
    let reporter = &mut ctx.accounts.reporter;
    reporter.grant(registry.key(), identity, timestamp)?;
    reporter.bump = [*ctx.bumps.get("reporter").ok_or(Error::BumpNotFound)?];
    registry.increment_reporters()?;
    msg!("trusted reporters: {}", registry.reporter_count);

    emit!(ReporterAdded {
        registry: registry.key(),
        reporter: identity,
    });

    Ok(())
}

#[event]
pub struct ReporterAdded {
    pub registry: Pubkey,
    pub reporter: Pubkey,
}
