pub const REGISTRY_SEED: &[u8] = b"registry";
pub const REPORTER_SEED: &[u8] = b"reporter";
pub const PIN_SEED: &[u8] = b"pin";
