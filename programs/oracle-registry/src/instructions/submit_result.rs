use anchor_lang::prelude::*;
use crate::constants::{PIN_SEED, REGISTRY_SEED, REPORTER_SEED};
use crate::error::Error;
use crate::state::Registry;
use crate::util::{is_trusted_reporter, load_pinned_reporter};

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct SubmitResult<'info> {
    pub reporter: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump[0],
    )]
    pub registry: Box<Account<'info, Registry>>,

    /// CHECK: Inspected by is_trusted_reporter
    #[account(
        seeds = [REPORTER_SEED, registry.key().as_ref(), reporter.key().as_ref()],
        bump,
    )]
    pub reporter_record: UncheckedAccount<'info>,

    /// CHECK: May not exist when the bet has no pin
    #[account(
        seeds = [PIN_SEED, registry.key().as_ref(), &bet_id.to_le_bytes()],
        bump,
    )]
    pub pin: UncheckedAccount<'info>,
}

/// Records a reporter's view of a bet outcome. Only emits an event: the
/// ledger authorizes and performs settlement on its own.
pub fn submit_result<'info>(
    ctx: Context<'_, '_, '_, 'info, SubmitResult<'info>>,
    bet_id: u64,
    outcome: bool,
) -> Result<bool> {
    let reporter = ctx.accounts.reporter.key();
    let registry = ctx.accounts.registry.key();

    let trusted = is_trusted_reporter(
        &registry,
        &reporter,
        &ctx.accounts.reporter_record.to_account_info(),
    )?;
    let pinned = load_pinned_reporter(&ctx.accounts.pin.to_account_info())?;
    check_submission(reporter, trusted, pinned)?;

    emit!(ResultSubmitted {
        registry,
        bet_id,
        outcome,
        reporter,
    });

    Ok(outcome)
}

fn check_submission(
    reporter: Pubkey,
    reporter_is_trusted: bool,
    pinned: Option<Pubkey>,
) -> Result<()> {
    if !reporter_is_trusted {
        msg!("{} is not a trusted reporter", reporter);
        return err!(Error::Unauthorized);
    }

    match pinned {
        Some(pinned) if pinned != reporter => {
            msg!("Bet is pinned to {}", pinned);
            err!(Error::Unauthorized)
        }
        _ => Ok(()),
    }
}

#[event]
pub struct ResultSubmitted {
    pub registry: Pubkey,
    pub bet_id: u64,
    pub outcome: bool,
    pub reporter: Pubkey,
}
