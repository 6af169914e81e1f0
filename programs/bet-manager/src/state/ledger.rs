use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;
use crate::constants::BET_SEED;
use crate::error::Error;
use crate::util::is_default;

pub const LEDGER_VERSION: u8 = 1;

pub const LEDGER_SIZE: usize = 8 + 1 + 1 + 32 + 32 + 8;

#[account]
pub struct Ledger {
	/// Bump seed used to generate the program address
	pub bump: [u8; 1],
	pub version: u8,
	/// Can settle any bet and manage the ledger
	pub admin: Pubkey,
	/// oracle-registry Registry whose trusted reporters may settle bets
	pub registry: Pubkey,
	/// Number of bets created, also the id of the next bet
	pub bet_count: u64,
}

impl Ledger {
	pub fn assert_admin(&self, caller: Pubkey) -> Result<()> {
		if self.admin != caller {
			return err!(Error::Unauthorized);
		}
		Ok(())
	}

	/// Settlement is open to the admin and to any reporter the registry trusts.
	pub fn authorize_settler(&self, caller: Pubkey, caller_is_trusted: bool) -> Result<()> {
		if caller == self.admin {
			msg!("Settling as ledger admin");
			return Ok(());
		}
		if caller_is_trusted {
			msg!("Settling as trusted reporter {}", caller);
			return Ok(());
		}
		err!(Error::Unauthorized)
	}

	pub fn next_bet_id(&mut self) -> Result<u64> {
		let id = self.bet_count;
		self.bet_count = self.bet_count.checked_add(1)
			.ok_or(Error::OverflowError)?;
		Ok(id)
	}

	pub fn contains(&self, bet_id: u64) -> bool {
		bet_id < self.bet_count
	}

	pub fn set_admin(&mut self, caller: Pubkey, new_admin: Pubkey) -> Result<()> {
		self.assert_admin(caller)?;
		if is_default(new_admin) {
			return err!(Error::InvalidAdmin);
		}
		self.admin = new_admin;
		Ok(())
	}

	pub fn set_registry(&mut self, caller: Pubkey, registry: Pubkey) -> Result<()> {
		self.assert_admin(caller)?;
		if is_default(registry) {
			return err!(Error::InvalidRegistry);
		}
		self.registry = registry;
		Ok(())
	}

	pub fn bet_address(ledger: &Pubkey, bet_id: u64) -> Pubkey {
		Pubkey::find_program_address(
			&[BET_SEED, ledger.as_ref(), &bet_id.to_le_bytes()],
			&crate::ID,
		).0
	}

	/// Addresses of every bet ever created, in id order. Bets are never
	/// closed, so each address holds a Bet account.
	pub fn bet_addresses(&self, ledger: &Pubkey) -> Vec<Pubkey> {
		(0..self.bet_count)
			.map(|bet_id| Ledger::bet_address(ledger, bet_id))
			.collect()
	}
}
