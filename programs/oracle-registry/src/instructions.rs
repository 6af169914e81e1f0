mod add_trusted_reporter;
mod get_pinned_reporter;
mod initialize;
mod is_trusted;
mod pin_reporter_to_bet;
mod remove_trusted_reporter;
mod submit_result;
mod transfer_admin;

pub use add_trusted_reporter::*;
pub use get_pinned_reporter::*;
pub use initialize::*;
pub use is_trusted::*;
pub use pin_reporter_to_bet::*;
pub use remove_trusted_reporter::*;
pub use submit_result::*;
pub use transfer_admin::*;
