use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod util;

declare_id!("DYpVHA96AidWpZvh1fQibh7hNi8evuLqyVM6BjQrcUXF");

#[program]
pub mod oracle_registry {
    use super::*;

    pub fn initialize<'info>(
        ctx: Context<'_, '_, '_, 'info, Initialize<'info>>,
    ) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn add_trusted_reporter<'info>(
        ctx: Context<'_, '_, '_, 'info, AddTrustedReporter<'info>>,
        identity: Pubkey,
    ) -> Result<()> {
        instructions::add_trusted_reporter(ctx, identity)
    }

    pub fn remove_trusted_reporter<'info>(
        ctx: Context<'_, '_, '_, 'info, RemoveTrustedReporter<'info>>,
        identity: Pubkey,
    ) -> Result<()> {
        instructions::remove_trusted_reporter(ctx, identity)
    }

    pub fn is_trusted<'info>(
        ctx: Context<'_, '_, '_, 'info, IsTrusted<'info>>,
        identity: Pubkey,
    ) -> Result<bool> {
        instructions::is_trusted(ctx, identity)
    }

    pub fn pin_reporter_to_bet<'info>(
        ctx: Context<'_, '_, '_, 'info, PinReporterToBet<'info>>,
        bet_id: u64,
        identity: Pubkey,
    ) -> Result<()> {
        instructions::pin_reporter_to_bet(ctx, bet_id, identity)
    }

    pub fn get_pinned_reporter<'info>(
        ctx: Context<'_, '_, '_, 'info, GetPinnedReporter<'info>>,
        bet_id: u64,
    ) -> Result<Option<Pubkey>> {
        instructions::get_pinned_reporter(ctx, bet_id)
    }

    pub fn submit_result<'info>(
        ctx: Context<'_, '_, '_, 'info, SubmitResult<'info>>,
        bet_id: u64,
        outcome: bool,
    ) -> Result<bool> {
        instructions::submit_result(ctx, bet_id, outcome)
    }

    pub fn transfer_admin<'info>(
        ctx: Context<'_, '_, '_, 'info, TransferAdmin<'info>>,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::transfer_admin(ctx, new_admin)
    }
}
