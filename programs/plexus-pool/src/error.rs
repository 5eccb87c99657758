use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Reward rate and lock duration must both be positive")]
    InvalidConfig,

    #[msg("Lock duration has not elapsed since the last deposit")]
    LockActive,

    #[msg("ERR: INSUFFICIENT REWARD BALANCE")]
    InsufficientRewardBalance,

    #[msg("Token transfer was rejected")]
    TransferFailed,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,

    #[msg("Signer is not the registry authority")]
    InvalidRegistry,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Invalid token mint")]
    InvalidMint,
}
