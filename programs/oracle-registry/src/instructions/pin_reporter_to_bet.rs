use anchor_lang::prelude::*;
use crate::constants::{PIN_SEED, REGISTRY_SEED, REPORTER_SEED};
use crate::error::Error;
use crate::state::{BetPin, Registry, BET_PIN_SIZE};
use crate::util::is_trusted_reporter;

#[derive(Accounts)]
#[instruction(bet_id: u64, identity: Pubkey)]
pub struct PinReporterToBet<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump[0],
    )]
    pub registry: Box<Account<'info, Registry>>,

    /// CHECK: May not exist; inspected by is_trusted_reporter
    #[account(
        seeds = [REPORTER_SEED, registry.key().as_ref(), identity.as_ref()],
        bump,
    )]
    pub reporter: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        seeds = [PIN_SEED, registry.key().as_ref(), &bet_id.to_le_bytes()],
        bump,
        space = BET_PIN_SIZE,
        payer = admin,
    )]
    pub pin: Box<Account<'info, BetPin>>,

    pub system_program: Program<'info, System>,
}

pub fn pin_reporter_to_bet<'info>(
    ctx: Context<'_, '_, '_, 'info, PinReporterToBet<'info>>,
    bet_id: u64,
    identity: Pubkey,
) -> Result<()> {
    let registry = &ctx.accounts.registry;
    registry.assert_admin(ctx.accounts.admin.key())?;

    let trusted = is_trusted_reporter(
        &registry.key(),
        &identity,
        &ctx.accounts.reporter.to_account_info(),
    )?;

    let pin = &mut ctx.accounts.pin;
    pin.assign(registry.key(), bet_id, identity, trusted)?;
    pin.bump = [*ctx.bumps.get("pin").ok_or(Error::BumpNotFound)?];

    emit!(ReporterPinned {
        registry: registry.key(),
        bet_id,
        reporter: identity,
    });

    Ok(())
}

#[event]
pub struct ReporterPinned {
    pub registry: Pubkey,
    pub bet_id: u64,
    pub reporter: Pubkey,
}
