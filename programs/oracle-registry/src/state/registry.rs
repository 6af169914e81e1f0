use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;
use crate::error::Error;
use crate::util::is_default;

pub const REGISTRY_VERSION: u8 = 1;

pub const REGISTRY_SIZE: usize = 8 + 1 + 1 + 32 + 4;

#[account]
pub struct Registry {
	/// Bump seed used to generate the program address
	pub bump: [u8; 1],
	pub version: u8,
	/// Manages the trusted reporter set and bet pins
	pub admin: Pubkey,
	/// Number of reporters currently trusted
	pub reporter_count: u32,
}

impl Registry {
	pub fn assert_admin(&self, caller: Pubkey) -> Result<()> {
		if self.admin != caller {
			msg!("{} is not the registry admin", caller);
			return err!(Error::Unauthorized);
		}
		Ok(())
	}

	pub fn set_admin(&mut self, caller: Pubkey, new_admin: Pubkey) -> Result<()> {
		self.assert_admin(caller)?;
		if is_default(new_admin) {
			return err!(Error::InvalidAdmin);
		}
		self.admin = new_admin;
		Ok(())
	}

	pub fn increment_reporters(&mut self) -> Result<()> {
		self.reporter_count = self.reporter_count.checked_add(1)
			.ok_or(Error::OverflowError)?;
		Ok(())
	}

	pub fn decrement_reporters(&mut self) -> Result<()> {
		self.reporter_count = self.reporter_count.checked_sub(1)
			.ok_or(Error::OverflowError)?;
		Ok(())
	}
}
