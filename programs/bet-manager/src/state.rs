pub mod bet;
pub mod ledger;

pub use bet::*;
pub use ledger::*;
