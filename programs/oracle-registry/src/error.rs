use anchor_lang::prelude::*;

#[error_code]
pub enum Error {
    /// 0
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,
    #[msg("The default public key cannot be a reporter")]
    InvalidReporter,
    #[msg("The reporter is already trusted")]
    ReporterAlreadyTrusted,
    #[msg("The reporter is not trusted")]
    ReporterNotTrusted,
    #[msg("A reporter has already been pinned to this bet")]
    BetAlreadyPinned,

    /// 5
    #[msg("The default public key cannot be the admin")]
    InvalidAdmin,
    #[msg("Overflow error")]
    OverflowError,
    #[msg("Bump seed was not found")]
    BumpNotFound,
}
