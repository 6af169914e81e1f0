use anchor_lang::prelude::*;
use crate::constants::{PIN_SEED, REGISTRY_SEED};
use crate::state::Registry;
use crate::util::load_pinned_reporter;

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct GetPinnedReporter<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump[0],
    )]
    pub registry: Box<Account<'info, Registry>>,

    /// CHECK: May not exist when the bet has no pin
    #[account(
        seeds = [PIN_SEED, registry.key().as_ref(), &bet_id.to_le_bytes()],
        bump,
    )]
    pub pin: UncheckedAccount<'info>,
}

pub fn get_pinned_reporter<'info>(
    ctx: Context<'_, '_, '_, 'info, GetPinnedReporter<'info>>,
    _bet_id: u64,
) -> Result<Option<Pubkey>> {
    load_pinned_reporter(&ctx.accounts.pin.to_account_info())
}
