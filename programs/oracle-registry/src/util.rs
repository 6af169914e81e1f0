use anchor_lang::prelude::*;
use solana_program::pubkey::Pubkey;
use crate::constants::{PIN_SEED, REPORTER_SEED};
use crate::state::{BetPin, TrustedReporter};

pub fn is_default(key: Pubkey) -> bool {
    key == Pubkey::default()
}

pub fn reporter_address(registry: &Pubkey, identity: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[REPORTER_SEED, registry.as_ref(), identity.as_ref()],
        &crate::ID,
    ).0
}

pub fn pin_address(registry: &Pubkey, bet_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[PIN_SEED, registry.as_ref(), &bet_id.to_le_bytes()],
        &crate::ID,
    ).0
}

/// Returns true only if `record` is the live trust record of `identity` in
/// `registry`. Missing, foreign or revoked records are simply not trusted.
pub fn is_trusted_reporter(
    registry: &Pubkey,
    identity: &Pubkey,
    record: &AccountInfo,
) -> Result<bool> {
    if record.owner != &crate::ID || record.data_is_empty() {
        return Ok(false);
    }
    if reporter_address(registry, identity) != record.key() {
        msg!("Reporter record {} does not belong to {}", record.key(), identity);
        return Ok(false);
    }

    let data = record.try_borrow_data()?;
    let reporter = TrustedReporter::try_deserialize(&mut data.as_ref())?;
    Ok(reporter.is_trusted
        && reporter.registry == *registry
        && reporter.identity == *identity)
}

/// Reads the reporter pinned through `pin`, if the pin account exists.
pub fn load_pinned_reporter(pin: &AccountInfo) -> Result<Option<Pubkey>> {
    if pin.owner != &crate::ID || pin.data_is_empty() {
        return Ok(None);
    }

    let data = pin.try_borrow_data()?;
    let pin = BetPin::try_deserialize(&mut data.as_ref())?;
    Ok(pin.pinned())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Error;

    pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: Error) {
        match result {
            Err(anchor_lang::error::Error::AnchorError(error)) => {
                assert_eq!(u32::from(expected), error.error_code_number, "{}", error.error_name)
            }
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }

    fn serialize<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data
    }

    fn reporter(registry: Pubkey, identity: Pubkey, is_trusted: bool) -> TrustedReporter {
        TrustedReporter {
            bump: [255],
            registry,
            identity,
            is_trusted,
            added_at: 0,
        }
    }

    #[test]
    fn default_key_is_default() {
        assert!(is_default(Pubkey::default()));
        assert!(!is_default(Pubkey::new_unique()));
    }

    #[test]
    fn live_record_is_trusted() {
        let registry = Pubkey::new_unique();
        let identity = Pubkey::new_unique();
        let key = reporter_address(&registry, &identity);
        let mut data = serialize(&reporter(registry, identity, true));
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &crate::ID, false, 0);

        assert!(is_trusted_reporter(&registry, &identity, &info).unwrap());
    }

    #[test]
    fn revoked_record_is_not_trusted() {
        let registry = Pubkey::new_unique();
        let identity = Pubkey::new_unique();
        let key = reporter_address(&registry, &identity);
        let mut data = serialize(&reporter(registry, identity, false));
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &crate::ID, false, 0);

        assert!(!is_trusted_reporter(&registry, &identity, &info).unwrap());
    }

    #[test]
    fn record_of_another_identity_is_not_trusted() {
        let registry = Pubkey::new_unique();
        let identity = Pubkey::new_unique();
        let impostor = Pubkey::new_unique();
        let key = reporter_address(&registry, &identity);
        let mut data = serialize(&reporter(registry, identity, true));
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &crate::ID, false, 0);

        assert!(!is_trusted_reporter(&registry, &impostor, &info).unwrap());
    }

    #[test]
    fn record_owned_by_another_program_is_not_trusted() {
        let registry = Pubkey::new_unique();
        let identity = Pubkey::new_unique();
        let key = reporter_address(&registry, &identity);
        let owner = Pubkey::new_unique();
        let mut data = serialize(&reporter(registry, identity, true));
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

        assert!(!is_trusted_reporter(&registry, &identity, &info).unwrap());
    }

    #[test]
    fn missing_pin_reads_as_none() {
        let key = pin_address(&Pubkey::new_unique(), 0);
        let system_program = solana_program::system_program::ID;
        let mut data: Vec<u8> = Vec::new();
        let mut lamports = 0;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &system_program, false, 0);

        assert_eq!(None, load_pinned_reporter(&info).unwrap());
    }

    #[test]
    fn stored_pin_reads_reporter() {
        let registry = Pubkey::new_unique();
        let reporter = Pubkey::new_unique();
        let key = pin_address(&registry, 4);
        let mut data = serialize(&BetPin {
            bump: [255],
            registry,
            bet_id: 4,
            reporter,
        });
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &crate::ID, false, 0);

        assert_eq!(Some(reporter), load_pinned_reporter(&info).unwrap());
    }
}
