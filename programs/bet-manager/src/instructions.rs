mod admin;
mod cancel_bet;
mod create_bet;
mod get_bet;
mod initialize;
mod join_bet;
mod settle_bet;
mod timeout_bet;

pub use admin::*;
pub use cancel_bet::*;
pub use create_bet::*;
pub use get_bet::*;
pub use initialize::*;
pub use join_bet::*;
pub use settle_bet::*;
pub use timeout_bet::*;
