pub const LEDGER_SEED: &[u8] = b"ledger";
pub const BET_SEED: &[u8] = b"bet";

pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_TERMS_FIELD_LEN: usize = 64;
