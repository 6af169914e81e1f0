use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;
use crate::constants::{MAX_DESCRIPTION_LEN, MAX_TERMS_FIELD_LEN};
use crate::error::Error;
use crate::util::is_default;

pub const BET_VERSION: u8 = 1;

pub const BET_TERMS_SIZE: usize =
	4 + MAX_TERMS_FIELD_LEN + 4 + MAX_TERMS_FIELD_LEN + 8 + 1;

pub const BET_SIZE: usize =
	8 + 1 + 1 + 32 + 8 + 32 + 32 + 8 + (4 + MAX_DESCRIPTION_LEN) + (1 + BET_TERMS_SIZE) + 8 + 8 + 1 + 1 + 1;

#[derive(
	AnchorSerialize,
	AnchorDeserialize,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Debug
)]
pub enum BetStatus {
	/// Waiting for a counterparty
	Open,
	/// Both stakes held, waiting for a result or the deadline
	Active,
	Completed,
	Cancelled,
	Refunded,
}

impl BetStatus {
	pub fn is_terminal(&self) -> bool {
		matches!(self, BetStatus::Completed | BetStatus::Cancelled | BetStatus::Refunded)
	}
}

/// Machine-readable terms. When present these decide the outcome and the
/// description is only a label.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct BetTerms {
	pub sport_event: String,
	pub selected_team: String,
	pub threshold: u64,
	/// Creator wins when the observed value ends above the threshold, or below it when false
	pub is_more_line: bool,
}

impl BetTerms {
	pub fn validate(&self) -> Result<()> {
		if self.sport_event.len() > MAX_TERMS_FIELD_LEN
			|| self.selected_team.len() > MAX_TERMS_FIELD_LEN {
			return err!(Error::TermsTooLong);
		}
		Ok(())
	}
}

/// Lamports owed out of a bet's custody.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Payout {
	pub recipient: Pubkey,
	pub amount: u64,
}

#[account]
pub struct Bet {
	/// Bump seed used to generate the program address / custody account
	pub bump: [u8; 1],
	pub version: u8,
	pub ledger: Pubkey,
	pub id: u64,
	pub creator: Pubkey,
	/// Default key until someone joins
	pub joiner: Pubkey,
	/// Stake each side puts in, in lamports
	pub amount: u64,
	pub description: String,
	pub terms: Option<BetTerms>,
	pub created_at: i64,
	/// After this timestamp an unsettled active bet can be refunded
	pub deadline: i64,
	pub status: BetStatus,
	pub is_settled: bool,
	/// Only meaningful once is_settled is set
	pub creator_won: bool,
}

impl Bet {
	#[allow(clippy::too_many_arguments)]
	pub fn open(
		&mut self,
		ledger: Pubkey,
		id: u64,
		creator: Pubkey,
		amount: u64,
		description: String,
		terms: Option<BetTerms>,
		deadline: i64,
		now: i64,
	) -> Result<()> {
		if amount == 0 {
			return err!(Error::InvalidAmount);
		}
		// Both stakes together have to fit in custody
		amount.checked_mul(2).ok_or(Error::InvalidAmount)?;
		if deadline <= now {
			return err!(Error::InvalidDeadline);
		}
		if description.len() > MAX_DESCRIPTION_LEN {
			return err!(Error::DescriptionTooLong);
		}
		if let Some(terms) = &terms {
			terms.validate()?;
		}

		self.version = BET_VERSION;
		self.ledger = ledger;
		self.id = id;
		self.creator = creator;
		self.joiner = Pubkey::default();
		self.amount = amount;
		self.description = description;
		self.terms = terms;
		self.created_at = now;
		self.deadline = deadline;
		self.status = BetStatus::Open;
		self.is_settled = false;
		self.creator_won = false;
		Ok(())
	}

	pub fn join(&mut self, caller: Pubkey, amount: u64) -> Result<()> {
		if self.status != BetStatus::Open || self.has_joiner() {
			return err!(Error::InvalidBetStatus);
		}
		if caller == self.creator {
			return err!(Error::SelfJoin);
		}
		if amount != self.amount {
			msg!("Stake {} does not match bet amount {}", amount, self.amount);
			return err!(Error::AmountMismatch);
		}

		self.joiner = caller;
		self.status = BetStatus::Active;
		Ok(())
	}

	/// Records the outcome and returns the full pot owed to the winner.
	pub fn settle(&mut self, creator_won: bool) -> Result<Payout> {
		if self.is_settled {
			return err!(Error::BetAlreadySettled);
		}
		if self.status != BetStatus::Active || !self.has_joiner() {
			return err!(Error::InvalidBetStatus);
		}

		let pot = self.pot()?;
		let recipient = if creator_won { self.creator } else { self.joiner };

		self.creator_won = creator_won;
		self.is_settled = true;
		self.status = BetStatus::Completed;
		Ok(Payout { recipient, amount: pot })
	}

	/// Returns each side's stake once the deadline has passed unsettled.
	pub fn timeout(&mut self, now: i64) -> Result<[Payout; 2]> {
		if self.is_settled {
			return err!(Error::BetAlreadySettled);
		}
		if self.status != BetStatus::Active || !self.has_joiner() {
			return err!(Error::InvalidBetStatus);
		}
		if now <= self.deadline {
			return err!(Error::DeadlineNotReached);
		}

		self.status = BetStatus::Refunded;
		Ok([
			Payout { recipient: self.creator, amount: self.amount },
			Payout { recipient: self.joiner, amount: self.amount },
		])
	}

	pub fn cancel(&mut self, caller: Pubkey) -> Result<Payout> {
		if caller != self.creator {
			return err!(Error::Unauthorized);
		}
		if self.status != BetStatus::Open || self.has_joiner() {
			return err!(Error::InvalidBetStatus);
		}

		self.status = BetStatus::Cancelled;
		Ok(Payout { recipient: self.creator, amount: self.amount })
	}

	pub fn has_joiner(&self) -> bool {
		!is_default(self.joiner)
	}

	/// Lamports the bet should be holding on top of its rent reserve.
	pub fn custody(&self) -> Result<u64> {
		match self.status {
			BetStatus::Open => Ok(self.amount),
			BetStatus::Active => self.pot(),
			_ => Ok(0),
		}
	}

	fn pot(&self) -> Result<u64> {
		Ok(self.amount.checked_mul(2).ok_or(Error::OverflowError)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::tests::assert_error;
	use proptest::prelude::*;
	use solana_program::native_token::LAMPORTS_PER_SOL;
	use std::collections::HashMap;

	const NOW: i64 = 1_700_000_000;
	const DAY: i64 = 86_400;
	const STAKE: u64 = LAMPORTS_PER_SOL / 10;

	fn blank() -> Bet {
		Bet {
			bump: [255],
			version: 0,
			ledger: Pubkey::default(),
			id: 0,
			creator: Pubkey::default(),
			joiner: Pubkey::default(),
			amount: 0,
			description: String::new(),
			terms: None,
			created_at: 0,
			deadline: 0,
			status: BetStatus::Open,
			is_settled: false,
			creator_won: false,
		}
	}

	fn open_bet(creator: Pubkey) -> Bet {
		let mut bet = blank();
		bet.open(
			Pubkey::new_unique(),
			0,
			creator,
			STAKE,
			"X will win".to_string(),
			None,
			NOW + DAY,
			NOW,
		).unwrap();
		bet
	}

	fn active_bet(creator: Pubkey, joiner: Pubkey) -> Bet {
		let mut bet = open_bet(creator);
		bet.join(joiner, STAKE).unwrap();
		bet
	}

	/// Wallet balances next to the bet's custody, for checking where stakes end up.
	struct Book {
		wallets: HashMap<Pubkey, u64>,
		custody: u64,
	}

	impl Book {
		fn new() -> Self {
			Book { wallets: HashMap::new(), custody: 0 }
		}

		fn deposit(&mut self, amount: u64) {
			self.custody += amount;
		}

		fn pay(&mut self, payout: Payout) {
			self.custody -= payout.amount;
			*self.wallets.entry(payout.recipient).or_insert(0) += payout.amount;
		}

		fn received(&self, who: &Pubkey) -> u64 {
			self.wallets.get(who).copied().unwrap_or(0)
		}
	}

	#[test]
	fn create_opens_bet() {
		let creator = Pubkey::new_unique();
		let bet = open_bet(creator);

		assert_eq!(0, bet.id);
		assert_eq!(BetStatus::Open, bet.status);
		assert_eq!(creator, bet.creator);
		assert_eq!(STAKE, bet.amount);
		assert!(!bet.has_joiner());
		assert!(!bet.is_settled);
		assert_eq!(STAKE, bet.custody().unwrap());
	}

	#[test]
	fn create_keeps_structured_terms() {
		let terms = BetTerms {
			sport_event: "nba-2024-lal-bos".to_string(),
			selected_team: "LAL".to_string(),
			threshold: 210,
			is_more_line: true,
		};
		let mut bet = blank();
		bet.open(
			Pubkey::new_unique(),
			3,
			Pubkey::new_unique(),
			STAKE,
			"Over 210 total points".to_string(),
			Some(terms.clone()),
			NOW + DAY,
			NOW,
		).unwrap();

		assert_eq!(Some(terms), bet.terms);
		assert_eq!(3, bet.id);
	}

	#[test]
	fn create_rejects_zero_stake() {
		let mut bet = blank();
		assert_error(
			bet.open(Pubkey::new_unique(), 0, Pubkey::new_unique(), 0, String::new(), None, NOW + DAY, NOW),
			Error::InvalidAmount,
		);
	}

	#[test]
	fn create_rejects_stake_that_cannot_double() {
		let mut bet = blank();
		assert_error(
			bet.open(Pubkey::new_unique(), 0, Pubkey::new_unique(), u64::MAX, String::new(), None, NOW + DAY, NOW),
			Error::InvalidAmount,
		);
	}

	#[test]
	fn create_rejects_deadline_not_in_future() {
		let mut bet = blank();
		assert_error(
			bet.open(Pubkey::new_unique(), 0, Pubkey::new_unique(), STAKE, String::new(), None, NOW, NOW),
			Error::InvalidDeadline,
		);
		assert_error(
			bet.open(Pubkey::new_unique(), 0, Pubkey::new_unique(), STAKE, String::new(), None, NOW - 1, NOW),
			Error::InvalidDeadline,
		);
	}

	#[test]
	fn create_rejects_long_description() {
		let mut bet = blank();
		let description = "x".repeat(MAX_DESCRIPTION_LEN + 1);
		assert_error(
			bet.open(Pubkey::new_unique(), 0, Pubkey::new_unique(), STAKE, description, None, NOW + DAY, NOW),
			Error::DescriptionTooLong,
		);
	}

	#[test]
	fn create_rejects_long_terms() {
		let mut bet = blank();
		let terms = BetTerms {
			sport_event: "e".repeat(MAX_TERMS_FIELD_LEN + 1),
			selected_team: "LAL".to_string(),
			threshold: 0,
			is_more_line: false,
		};
		assert_error(
			bet.open(Pubkey::new_unique(), 0, Pubkey::new_unique(), STAKE, String::new(), Some(terms), NOW + DAY, NOW),
			Error::TermsTooLong,
		);
	}

	#[test]
	fn join_activates_bet() {
		let joiner = Pubkey::new_unique();
		let bet = active_bet(Pubkey::new_unique(), joiner);

		assert_eq!(BetStatus::Active, bet.status);
		assert_eq!(joiner, bet.joiner);
		assert_eq!(2 * STAKE, bet.custody().unwrap());
	}

	#[test]
	fn creator_cannot_join_own_bet() {
		let creator = Pubkey::new_unique();
		let mut bet = open_bet(creator);
		assert_error(bet.join(creator, STAKE), Error::SelfJoin);
		assert_eq!(BetStatus::Open, bet.status);
	}

	#[test]
	fn join_active_bet_fails() {
		let mut bet = active_bet(Pubkey::new_unique(), Pubkey::new_unique());
		assert_error(bet.join(Pubkey::new_unique(), STAKE), Error::InvalidBetStatus);
	}

	#[test]
	fn settle_pays_creator_the_pot() {
		let creator = Pubkey::new_unique();
		let mut bet = active_bet(creator, Pubkey::new_unique());

		let payout = bet.settle(true).unwrap();

		assert_eq!(Payout { recipient: creator, amount: 2 * STAKE }, payout);
		assert_eq!(BetStatus::Completed, bet.status);
		assert!(bet.is_settled);
		assert!(bet.creator_won);
		assert_eq!(0, bet.custody().unwrap());
	}

	#[test]
	fn settle_pays_joiner_when_creator_loses() {
		let joiner = Pubkey::new_unique();
		let mut bet = active_bet(Pubkey::new_unique(), joiner);

		let payout = bet.settle(false).unwrap();

		assert_eq!(Payout { recipient: joiner, amount: 2 * STAKE }, payout);
		assert!(!bet.creator_won);
	}

	#[test]
	fn settle_twice_fails() {
		let mut bet = active_bet(Pubkey::new_unique(), Pubkey::new_unique());
		bet.settle(true).unwrap();

		assert_error(bet.settle(true), Error::BetAlreadySettled);
		assert_error(bet.settle(false), Error::BetAlreadySettled);
		assert!(bet.creator_won);
	}

	#[test]
	fn settle_open_bet_fails() {
		let mut bet = open_bet(Pubkey::new_unique());
		assert_error(bet.settle(true), Error::InvalidBetStatus);
		assert!(!bet.is_settled);
	}

	#[test]
	fn timeout_refunds_both_sides() {
		let creator = Pubkey::new_unique();
		let joiner = Pubkey::new_unique();
		let mut bet = active_bet(creator, joiner);

		let refunds = bet.timeout(NOW + DAY + 1).unwrap();

		assert_eq!(Payout { recipient: creator, amount: STAKE }, refunds[0]);
		assert_eq!(Payout { recipient: joiner, amount: STAKE }, refunds[1]);
		assert_eq!(BetStatus::Refunded, bet.status);
		assert!(!bet.is_settled);
	}

	#[test]
	fn timeout_before_deadline_fails() {
		let mut bet = active_bet(Pubkey::new_unique(), Pubkey::new_unique());
		assert_error(bet.timeout(NOW), Error::DeadlineNotReached);
		assert_error(bet.timeout(NOW + DAY), Error::DeadlineNotReached);
		assert_eq!(BetStatus::Active, bet.status);
	}

	#[test]
	fn timeout_open_bet_fails() {
		let mut bet = open_bet(Pubkey::new_unique());
		assert_error(bet.timeout(NOW + 2 * DAY), Error::InvalidBetStatus);
	}

	#[test]
	fn timeout_settled_bet_fails() {
		let mut bet = active_bet(Pubkey::new_unique(), Pubkey::new_unique());
		bet.settle(false).unwrap();
		assert_error(bet.timeout(NOW + 2 * DAY), Error::BetAlreadySettled);
	}

	#[test]
	fn cancel_refunds_creator() {
		let creator = Pubkey::new_unique();
		let mut bet = open_bet(creator);

		let refund = bet.cancel(creator).unwrap();

		assert_eq!(Payout { recipient: creator, amount: STAKE }, refund);
		assert_eq!(BetStatus::Cancelled, bet.status);
	}

	#[test]
	fn only_creator_can_cancel() {
		let mut bet = open_bet(Pubkey::new_unique());
		assert_error(bet.cancel(Pubkey::new_unique()), Error::Unauthorized);
		assert_eq!(BetStatus::Open, bet.status);
	}

	#[test]
	fn cancel_joined_bet_fails() {
		let creator = Pubkey::new_unique();
		let mut bet = active_bet(creator, Pubkey::new_unique());
		assert_error(bet.cancel(creator), Error::InvalidBetStatus);
	}

	#[test]
	fn terminal_bets_accept_nothing() {
		let creator = Pubkey::new_unique();
		let joiner = Pubkey::new_unique();

		let mut completed = active_bet(creator, joiner);
		completed.settle(true).unwrap();

		let mut cancelled = open_bet(creator);
		cancelled.cancel(creator).unwrap();

		let mut refunded = active_bet(creator, joiner);
		refunded.timeout(NOW + 2 * DAY).unwrap();

		for bet in [&mut completed, &mut cancelled, &mut refunded] {
			let status = bet.status;
			assert!(status.is_terminal());
			assert!(bet.join(Pubkey::new_unique(), STAKE).is_err());
			assert!(bet.settle(true).is_err());
			assert!(bet.settle(false).is_err());
			assert!(bet.timeout(NOW + 3 * DAY).is_err());
			assert!(bet.cancel(creator).is_err());
			assert_eq!(status, bet.status);
			assert_eq!(0, bet.custody().unwrap());
		}
	}

	#[test]
	fn settled_bet_pays_creator_full_pot() {
		let creator = Pubkey::new_unique();
		let joiner = Pubkey::new_unique();
		let mut book = Book::new();

		let mut bet = open_bet(creator);
		book.deposit(bet.amount);
		bet.join(joiner, STAKE).unwrap();
		book.deposit(STAKE);

		book.pay(bet.settle(true).unwrap());

		assert_eq!(2 * STAKE, book.received(&creator));
		assert_eq!(0, book.received(&joiner));
		assert_eq!(0, book.custody);
	}

	#[test]
	fn expired_bet_returns_each_stake() {
		let creator = Pubkey::new_unique();
		let joiner = Pubkey::new_unique();
		let mut book = Book::new();

		let mut bet = open_bet(creator);
		book.deposit(bet.amount);
		bet.join(joiner, STAKE).unwrap();
		book.deposit(STAKE);

		for refund in bet.timeout(NOW + DAY + 1).unwrap() {
			book.pay(refund);
		}

		assert_eq!(STAKE, book.received(&creator));
		assert_eq!(STAKE, book.received(&joiner));
		assert_eq!(0, book.custody);
	}

	#[test]
	fn cancelled_bet_refunds_once() {
		let creator = Pubkey::new_unique();
		let mut book = Book::new();

		let mut bet = open_bet(creator);
		book.deposit(bet.amount);
		book.pay(bet.cancel(creator).unwrap());

		assert_error(bet.cancel(creator), Error::InvalidBetStatus);
		assert_eq!(STAKE, book.received(&creator));
		assert_eq!(0, book.custody);
	}

	proptest! {
		#[test]
		fn join_requires_exact_stake(amount in 1..u64::MAX / 2, offered in any::<u64>()) {
			let mut bet = blank();
			bet.open(Pubkey::new_unique(), 0, Pubkey::new_unique(), amount, String::new(), None, NOW + DAY, NOW).unwrap();

			let result = bet.join(Pubkey::new_unique(), offered);

			prop_assert_eq!(result.is_ok(), offered == amount);
			let expected = if offered == amount { BetStatus::Active } else { BetStatus::Open };
			prop_assert_eq!(expected, bet.status);
		}

		#[test]
		fn settlement_pays_whole_pot_to_one_side(amount in 1..u64::MAX / 2, creator_won in any::<bool>()) {
			let creator = Pubkey::new_unique();
			let joiner = Pubkey::new_unique();
			let mut bet = blank();
			bet.open(Pubkey::new_unique(), 0, creator, amount, String::new(), None, NOW + DAY, NOW).unwrap();
			bet.join(joiner, amount).unwrap();

			let payout = bet.settle(creator_won).unwrap();

			prop_assert_eq!(2 * amount, payout.amount);
			prop_assert_eq!(if creator_won { creator } else { joiner }, payout.recipient);
		}
	}
}
