use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;
use crate::error::Error;
use crate::util::is_default;

pub const TRUSTED_REPORTER_SIZE: usize = 8 + 1 + 32 + 32 + 1 + 8;

/// Trust record for a single identity. Created the first time the identity is
/// added and kept afterwards, so removing and re-adding reuses the account.
#[account]
pub struct TrustedReporter {
	pub bump: [u8; 1],
	pub registry: Pubkey,
	pub identity: Pubkey,
	pub is_trusted: bool,
	/// Timestamp of the most recent addition
	pub added_at: i64,
}

impl TrustedReporter {
	pub fn grant(&mut self, registry: Pubkey, identity: Pubkey, now: i64) -> Result<()> {
		if is_default(identity) {
			return err!(Error::InvalidReporter);
		}
		if self.is_trusted {
			return err!(Error::ReporterAlreadyTrusted);
		}

		self.registry = registry;
		self.identity = identity;
		self.is_trusted = true;
		self.added_at = now;
		Ok(())
	}

	pub fn revoke(&mut self) -> Result<()> {
		if !self.is_trusted {
			return err!(Error::ReporterNotTrusted);
		}
		self.is_trusted = false;
		Ok(())
	}
}
