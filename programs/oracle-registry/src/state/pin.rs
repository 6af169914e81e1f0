use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;
use crate::error::Error;
use crate::util::is_default;

pub const BET_PIN_SIZE: usize = 8 + 1 + 32 + 8 + 32;

/// Binds one bet id to the only reporter allowed to submit its result.
#[account]
pub struct BetPin {
	pub bump: [u8; 1],
	pub registry: Pubkey,
	pub bet_id: u64,
	/// Default key while unassigned
	pub reporter: Pubkey,
}

impl BetPin {
	pub fn assign(
		&mut self,
		registry: Pubkey,
		bet_id: u64,
		reporter: Pubkey,
		reporter_is_trusted: bool,
	) -> Result<()> {
		if !reporter_is_trusted {
			return err!(Error::ReporterNotTrusted);
		}
		if !is_default(self.reporter) {
			msg!("Bet {} is already pinned to {}", bet_id, self.reporter);
			return err!(Error::BetAlreadyPinned);
		}

		self.registry = registry;
		self.bet_id = bet_id;
		self.reporter = reporter;
		Ok(())
	}

	pub fn pinned(&self) -> Option<Pubkey> {
		if is_default(self.reporter) {
			None
		} else {
			Some(self.reporter)
		}
	}
}
