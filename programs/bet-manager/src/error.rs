use anchor_lang::prelude::*;

#[error_code]
pub enum Error {
    /// 0
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,
    #[msg("The stake must be greater than zero")]
    InvalidAmount,
    #[msg("The deadline must be in the future")]
    InvalidDeadline,
    #[msg("The stake must match the bet amount exactly")]
    AmountMismatch,
    #[msg("The description is too long")]
    DescriptionTooLong,

    /// 5
    #[msg("A structured term is too long")]
    TermsTooLong,
    #[msg("The bet does not exist")]
    BetNotFound,
    #[msg("The bet status does not allow this action")]
    InvalidBetStatus,
    #[msg("The creator cannot join their own bet")]
    SelfJoin,
    #[msg("The bet has already been settled")]
    BetAlreadySettled,

    /// 10
    #[msg("The deadline has not passed yet")]
    DeadlineNotReached,
    #[msg("Moving the staked funds failed")]
    TransferFailed,
    #[msg("Overflow error")]
    OverflowError,
    #[msg("The counterparty accounts do not match the bet")]
    CounterpartyMismatch,
    #[msg("The default public key cannot be the admin")]
    InvalidAdmin,

    /// 15
    #[msg("The default public key cannot be the registry")]
    InvalidRegistry,
    #[msg("Bump seed was not found")]
    BumpNotFound,
}
