use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Reward rate and lock duration must be positive")]
    InvalidConfig,

    #[msg("A pool already exists for this salt")]
    DuplicateSalt,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Pool and weight lists differ in length")]
    LengthMismatch,

    #[msg("Weights add up to more than 10000 basis points")]
    WeightsExceedTotal,

    #[msg("Account is not a pool of this registry")]
    InvalidPool,

    #[msg("Missing remaining account")]
    MissingRemainingAccount,

    #[msg("Invalid token mint")]
    InvalidMint,

    #[msg("Input account owner is not the program address")]
    InvalidOwner,

    #[msg("Math overflow")]
    MathOverflow,
}
