use anchor_lang::prelude::*;
use instructions::*;
use state::{Bet, BetTerms};

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod util;

declare_id!("35drWaNdUUSVHTzJgk9jDZ9wLb6k98u7RHyZ32XaPnyy");

#[program]
pub mod bet_manager {
    use super::*;

    pub fn initialize<'info>(
        ctx: Context<'_, '_, '_, 'info, Initialize<'info>>,
        registry: Pubkey,
    ) -> Result<()> {
        instructions::initialize(ctx, registry)
    }

    pub fn create_bet<'info>(
        ctx: Context<'_, '_, '_, 'info, CreateBet<'info>>,
        description: String,
        deadline: i64,
        amount: u64,
        terms: Option<BetTerms>,
    ) -> Result<()> {
        instructions::create_bet(ctx, description, deadline, amount, terms)
    }

    pub fn join_bet<'info>(
        ctx: Context<'_, '_, '_, 'info, JoinBet<'info>>,
        bet_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::join_bet(ctx, bet_id, amount)
    }

    pub fn settle_bet<'info>(
        ctx: Context<'_, '_, '_, 'info, SettleBet<'info>>,
        bet_id: u64,
        creator_won: bool,
    ) -> Result<()> {
        instructions::settle_bet(ctx, bet_id, creator_won)
    }

    pub fn timeout_bet<'info>(
        ctx: Context<'_, '_, '_, 'info, TimeoutBet<'info>>,
        bet_id: u64,
    ) -> Result<()> {
        instructions::timeout_bet(ctx, bet_id)
    }

    pub fn cancel_bet<'info>(
        ctx: Context<'_, '_, '_, 'info, CancelBet<'info>>,
        bet_id: u64,
    ) -> Result<()> {
        instructions::cancel_bet(ctx, bet_id)
    }

    pub fn get_bet<'info>(
        ctx: Context<'_, '_, '_, 'info, GetBet<'info>>,
        bet_id: u64,
    ) -> Result<Bet> {
        instructions::get_bet(ctx, bet_id)
    }

    pub fn transfer_admin<'info>(
        ctx: Context<'_, '_, '_, 'info, LedgerAdmin<'info>>,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::transfer_admin(ctx, new_admin)
    }

    pub fn set_registry<'info>(
        ctx: Context<'_, '_, '_, 'info, LedgerAdmin<'info>>,
        registry: Pubkey,
    ) -> Result<()> {
        instructions::set_registry(ctx, registry)
    }
}
